#![allow(clippy::module_inception)]

//! Lexical analysis for a small C-like language.
//!
//! The crate turns raw source text into a flat stream of classified tokens.
//! Two interchangeable scanning engines are provided:
//!
//! - [`lexer::fsm`] - a finite-state-machine walker, the primary engine.
//!   Malformed input is reported inline as `Error` tokens and the scan
//!   always runs to the end of the input.
//! - [`lexer::rx`] - a regex-pattern scanner producing the same token
//!   stream on well-formed input, but stopping with a `LexError` on the
//!   first unrecognised lexeme.
//!
//! Comments and whitespace are consumed and produce no tokens. String and
//! rune lexemes keep their escape sequences undecoded; see
//! [`lexer::escape`] for the optional decoding step.

pub mod errors;
pub mod lexer;
pub mod macros;

//! Error types for the analyzer.
//!
//! The FSM engine reports malformed input inline as `Error` tokens and
//! never fails; the types here cover the hard-stop surface of the regex
//! engine and the binary.

pub mod errors;

#[cfg(test)]
mod tests;

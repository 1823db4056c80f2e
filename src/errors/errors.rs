use thiserror::Error;

/// A hard lexing failure from the regex engine. The scan stops at the
/// first of these; nothing after the offending position is examined.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    #[error("empty rune literal")]
    EmptyRune,
}

//! Unit tests for error handling.

use crate::errors::errors::LexError;

#[test]
fn test_unrecognised_token_display() {
    let error = LexError::UnrecognisedToken {
        token: "@".to_string(),
    };

    assert_eq!(error.to_string(), "unrecognised token: \"@\"");
}

#[test]
fn test_unterminated_block_comment_display() {
    assert_eq!(
        LexError::UnterminatedBlockComment.to_string(),
        "unterminated block comment"
    );
}

#[test]
fn test_empty_rune_display() {
    assert_eq!(LexError::EmptyRune.to_string(), "empty rune literal");
}

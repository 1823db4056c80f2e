//! Utility macros for the analyzer.
//!
//! This module defines helper macros used by the scanning engines:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a regex-engine handler for fixed lexemes
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's lexeme text
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntLiteral, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr) => {
        Token {
            kind: $kind,
            text: $text,
        }
    };
}

/// Creates a regex-engine handler for patterns whose lexeme is a fixed
/// string, such as operators and separators.
///
/// Generates a handler that pushes a token with the given kind and text
/// and advances the scan position by the lexeme's length.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new(r"^\+=").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "+="),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $text:literal) => {
        |lexer: &mut Lexer, _matched: &str| {
            lexer.push(MK_TOKEN!($kind, String::from($text)));
            lexer.advance_n($text.len());
            Ok(())
        }
    };
}

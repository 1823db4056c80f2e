//! Escape-sequence decoding.
//!
//! The scanners keep string and rune lexemes undecoded; callers that need
//! the interpreted value run this step separately.

/// Decode the escape sequences of a string or rune lexeme.
///
/// Recognised sequences: `\n`, `\t`, `\r`, `\0`, `\\`, `\"`, `\'` and
/// `\xHH` with exactly two hex digits. Anything else, including a trailing
/// lone backslash, is kept verbatim.
pub fn decode_escapes(raw: &str) -> String {
    let mut result = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            Some('n') => {
                result.push('\n');
                chars.next();
            }
            Some('t') => {
                result.push('\t');
                chars.next();
            }
            Some('r') => {
                result.push('\r');
                chars.next();
            }
            Some('0') => {
                result.push('\0');
                chars.next();
            }
            Some('\\') => {
                result.push('\\');
                chars.next();
            }
            Some('"') => {
                result.push('"');
                chars.next();
            }
            Some('\'') => {
                result.push('\'');
                chars.next();
            }
            Some('x') => {
                let mut lookahead = chars.clone();
                lookahead.next();

                match (lookahead.next(), lookahead.next()) {
                    (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
                        let value = hi.to_digit(16).unwrap_or(0) * 16 + lo.to_digit(16).unwrap_or(0);
                        result.push(value as u8 as char);
                        chars = lookahead;
                    }
                    _ => {
                        // Not a full \xHH sequence. Keep the backslash; the
                        // following characters pass through untouched.
                        result.push(ch);
                    }
                }
            }
            _ => {
                // Unknown escape or trailing backslash. Keep the backslash.
                result.push(ch);
            }
        }
    }

    result
}

//! Finite-state-machine scanning engine.
//!
//! A single left-to-right pass over the input. The scanner is always in
//! exactly one [`State`]; each step looks at the current character, and
//! either consumes it, or emits the buffered lexeme and re-dispatches the
//! character from [`State::Start`]. Every rejection path consumes at least
//! one character, so the scan terminates on any finite input.
//!
//! Malformed input never aborts the pass. It is reported inline as
//! [`TokenKind::Error`] tokens carrying either the offending lexeme or a
//! fixed diagnostic string (`"unterminated escape"`, `"empty rune"`,
//! `"unterminated block comment"`, ...).

use crate::MK_TOKEN;

use super::tokens::{classify_word, is_operator_start, Token, TokenKind, OPERATORS, SEPARATORS};

/// Scanner mode. Lives only on the stack of a single `tokenize` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    InIdentifier,
    InNumber,
    InHexNumber,
    InOctalNumber,
    InBinaryNumber,
    InFloat,
    InExponent,
    InExponentDigits,
    InString,
    InRawString,
    InRune,
    InOperator,
    InLineComment,
    InBlockComment,
}

/// Scan `source` into a token stream.
///
/// Whitespace and comments are consumed without producing tokens. The
/// returned stream, including any `Error` entries, is the complete answer
/// for the input; the caller decides whether errors are fatal.
pub fn tokenize(source: &str) -> Vec<Token> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens: Vec<Token> = Vec::new();
    let mut state = State::Start;
    let mut buffer = String::new();
    let mut pos = 0;

    while pos < chars.len() {
        let ch = chars[pos];

        match state {
            State::Start => {
                if ch.is_whitespace() {
                    pos += 1;
                    continue;
                }

                if ch == '/' && pos + 1 < chars.len() {
                    let next = chars[pos + 1];
                    if next == '/' {
                        state = State::InLineComment;
                        pos += 2;
                        continue;
                    }
                    if next == '*' {
                        state = State::InBlockComment;
                        pos += 2;
                        continue;
                    }
                }

                if is_operator_start(ch) {
                    state = State::InOperator;
                    buffer.push(ch);
                    pos += 1;
                } else if SEPARATORS.contains(&ch) {
                    tokens.push(MK_TOKEN!(TokenKind::Separator, ch.to_string()));
                    pos += 1;
                } else if ch == '`' {
                    state = State::InRawString;
                    pos += 1;
                } else if ch == '"' {
                    state = State::InString;
                    pos += 1;
                } else if ch == '\'' {
                    state = State::InRune;
                    pos += 1;
                } else if ch.is_ascii_digit() {
                    state = State::InNumber;
                    buffer.push(ch);
                    pos += 1;
                } else if ch.is_alphabetic() || ch == '_' {
                    state = State::InIdentifier;
                    buffer.push(ch);
                    pos += 1;
                } else {
                    tokens.push(MK_TOKEN!(TokenKind::Error, ch.to_string()));
                    pos += 1;
                }
            }

            State::InIdentifier => {
                if ch.is_alphanumeric() || ch == '_' {
                    buffer.push(ch);
                    pos += 1;
                } else {
                    tokens.push(MK_TOKEN!(classify_word(&buffer), buffer.clone()));
                    buffer.clear();
                    state = State::Start;
                }
            }

            State::InNumber => match ch {
                '_' => {
                    buffer.push(ch);
                    pos += 1;
                }
                '.' => {
                    buffer.push(ch);
                    state = State::InFloat;
                    pos += 1;
                }
                'e' | 'E' => {
                    buffer.push(ch);
                    state = State::InExponent;
                    pos += 1;
                }
                // Radix prefixes are only valid straight after a single 0.
                'x' | 'X' if buffer == "0" => {
                    buffer.push(ch);
                    state = State::InHexNumber;
                    pos += 1;
                }
                'o' | 'O' if buffer == "0" => {
                    buffer.push(ch);
                    state = State::InOctalNumber;
                    pos += 1;
                }
                'b' | 'B' if buffer == "0" => {
                    buffer.push(ch);
                    state = State::InBinaryNumber;
                    pos += 1;
                }
                _ if ch.is_ascii_digit() => {
                    buffer.push(ch);
                    pos += 1;
                }
                _ => {
                    tokens.push(MK_TOKEN!(TokenKind::IntLiteral, buffer.clone()));
                    buffer.clear();
                    state = State::Start;
                }
            },

            State::InHexNumber => {
                if ch.is_ascii_hexdigit() || ch == '_' {
                    buffer.push(ch);
                    pos += 1;
                } else {
                    tokens.push(MK_TOKEN!(TokenKind::IntLiteral, buffer.clone()));
                    buffer.clear();
                    state = State::Start;
                }
            }

            State::InOctalNumber => {
                if ('0'..='7').contains(&ch) || ch == '_' {
                    buffer.push(ch);
                    pos += 1;
                } else {
                    tokens.push(MK_TOKEN!(TokenKind::IntLiteral, buffer.clone()));
                    buffer.clear();
                    state = State::Start;
                }
            }

            State::InBinaryNumber => {
                if ch == '0' || ch == '1' || ch == '_' {
                    buffer.push(ch);
                    pos += 1;
                } else {
                    tokens.push(MK_TOKEN!(TokenKind::IntLiteral, buffer.clone()));
                    buffer.clear();
                    state = State::Start;
                }
            }

            State::InFloat => {
                if ch == '_' || ch.is_ascii_digit() {
                    buffer.push(ch);
                    pos += 1;
                } else if ch == 'e' || ch == 'E' {
                    buffer.push(ch);
                    state = State::InExponent;
                    pos += 1;
                } else {
                    tokens.push(MK_TOKEN!(TokenKind::FloatLiteral, buffer.clone()));
                    buffer.clear();
                    state = State::Start;
                }
            }

            State::InExponent => {
                if ch == '+' || ch == '-' || ch.is_ascii_digit() {
                    buffer.push(ch);
                    state = State::InExponentDigits;
                    pos += 1;
                } else {
                    // Malformed exponent. The offender is folded into the
                    // error lexeme and consumed, so the scan cannot stall.
                    buffer.push(ch);
                    tokens.push(MK_TOKEN!(TokenKind::Error, buffer.clone()));
                    buffer.clear();
                    state = State::Start;
                    pos += 1;
                }
            }

            State::InExponentDigits => {
                if ch.is_ascii_digit() || ch == '_' {
                    buffer.push(ch);
                    pos += 1;
                } else {
                    tokens.push(MK_TOKEN!(TokenKind::FloatLiteral, buffer.clone()));
                    buffer.clear();
                    state = State::Start;
                }
            }

            State::InString => {
                if ch == '"' {
                    tokens.push(MK_TOKEN!(TokenKind::StringLiteral, buffer.clone()));
                    buffer.clear();
                    state = State::Start;
                    pos += 1;
                } else if ch == '\\' {
                    if pos + 1 < chars.len() {
                        // Escapes stay undecoded in the lexeme.
                        buffer.push(ch);
                        buffer.push(chars[pos + 1]);
                        pos += 2;
                    } else {
                        tokens.push(MK_TOKEN!(
                            TokenKind::Error,
                            String::from("unterminated escape")
                        ));
                        buffer.clear();
                        state = State::Start;
                        pos += 1;
                    }
                } else {
                    buffer.push(ch);
                    pos += 1;
                }
            }

            State::InRawString => {
                if ch == '`' {
                    tokens.push(MK_TOKEN!(TokenKind::StringLiteral, buffer.clone()));
                    buffer.clear();
                    state = State::Start;
                    pos += 1;
                } else {
                    buffer.push(ch);
                    pos += 1;
                }
            }

            State::InRune => {
                if ch == '\'' {
                    if buffer.is_empty() {
                        tokens.push(MK_TOKEN!(TokenKind::Error, String::from("empty rune")));
                    } else {
                        tokens.push(MK_TOKEN!(TokenKind::RuneLiteral, buffer.clone()));
                    }
                    buffer.clear();
                    state = State::Start;
                    pos += 1;
                } else if ch == '\\' {
                    if pos + 1 < chars.len() {
                        buffer.push(ch);
                        buffer.push(chars[pos + 1]);
                        pos += 2;
                    } else {
                        tokens.push(MK_TOKEN!(
                            TokenKind::Error,
                            String::from("unterminated escape")
                        ));
                        buffer.clear();
                        state = State::Start;
                        pos += 1;
                    }
                } else {
                    buffer.push(ch);
                    pos += 1;
                }
            }

            State::InOperator => {
                let mut extended = buffer.clone();
                extended.push(ch);

                if OPERATORS.contains(extended.as_str()) {
                    buffer.push(ch);
                    pos += 1;
                } else if OPERATORS.contains(buffer.as_str()) {
                    tokens.push(MK_TOKEN!(TokenKind::Operator, buffer.clone()));
                    buffer.clear();
                    state = State::Start;
                } else {
                    // The buffer can never become an operator. Consume the
                    // rejected character too so the scan moves forward.
                    tokens.push(MK_TOKEN!(TokenKind::Error, buffer.clone()));
                    buffer.clear();
                    state = State::Start;
                    pos += 1;
                }
            }

            State::InLineComment => {
                if ch == '\n' {
                    state = State::Start;
                }
                pos += 1;
            }

            State::InBlockComment => {
                if ch == '*' && pos + 1 < chars.len() && chars[pos + 1] == '/' {
                    pos += 2;
                    state = State::Start;
                } else {
                    pos += 1;
                }
            }
        }
    }

    finish(state, buffer, &mut tokens);
    tokens
}

/// Finalize whatever state the scanner was left in when the input ran out.
/// A pending lexeme is emitted; an unterminated literal or comment becomes
/// an `Error` token with a fixed diagnostic.
fn finish(state: State, buffer: String, tokens: &mut Vec<Token>) {
    match state {
        State::Start | State::InLineComment => {}
        State::InIdentifier => {
            tokens.push(MK_TOKEN!(classify_word(&buffer), buffer));
        }
        State::InNumber | State::InHexNumber | State::InOctalNumber | State::InBinaryNumber => {
            tokens.push(MK_TOKEN!(TokenKind::IntLiteral, buffer));
        }
        State::InFloat | State::InExponentDigits => {
            tokens.push(MK_TOKEN!(TokenKind::FloatLiteral, buffer));
        }
        // An exponent marker with nothing after it, e.g. a source ending in `3e`.
        State::InExponent => {
            tokens.push(MK_TOKEN!(TokenKind::Error, buffer));
        }
        State::InOperator => {
            if OPERATORS.contains(buffer.as_str()) {
                tokens.push(MK_TOKEN!(TokenKind::Operator, buffer));
            } else {
                tokens.push(MK_TOKEN!(TokenKind::Error, buffer));
            }
        }
        State::InString => {
            tokens.push(MK_TOKEN!(
                TokenKind::Error,
                String::from("unterminated string")
            ));
        }
        State::InRawString => {
            tokens.push(MK_TOKEN!(
                TokenKind::Error,
                String::from("unterminated raw string")
            ));
        }
        State::InRune => {
            tokens.push(MK_TOKEN!(
                TokenKind::Error,
                String::from("unterminated rune")
            ));
        }
        State::InBlockComment => {
            tokens.push(MK_TOKEN!(
                TokenKind::Error,
                String::from("unterminated block comment")
            ));
        }
    }
}

//! Regex-pattern scanning engine.
//!
//! An ordered list of anchored patterns is tried at the cursor; the first
//! one that matches consumes its lexeme and the scan repeats from the new
//! position. Multi-character operators are listed before their prefixes so
//! the longest lexeme always wins.
//!
//! On well-formed input this engine produces the same token stream as
//! [`super::fsm`]. Unlike the FSM it stops at the first unrecognised
//! lexeme, unterminated block comment, or empty rune with a hard
//! [`LexError`] instead of emitting inline `Error` tokens.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::errors::LexError;
use crate::{MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{classify_word, Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), LexError>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
}

impl Lexer {
    fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: String::from(source),
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^`[^`]*`").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r#"^"(?:\\.|[^"\\])*""#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r"^'(?:\\.|[^'\\])*'").unwrap(), handler: rune_handler },
        RegexPattern { regex: Regex::new(r"^0[xX][0-9a-fA-F_]+").unwrap(), handler: int_handler },
        RegexPattern { regex: Regex::new(r"^0[bB][01_]+").unwrap(), handler: int_handler },
        RegexPattern { regex: Regex::new(r"^0[oO][0-7_]+").unwrap(), handler: int_handler },
        RegexPattern { regex: Regex::new(r"^[0-9][0-9_]*(\.[0-9_]*)?([eE][+-]?[0-9_]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^<<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "<<=") },
        RegexPattern { regex: Regex::new("^>>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, ">>=") },
        RegexPattern { regex: Regex::new(r"^&\^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "&^=") },
        RegexPattern { regex: Regex::new("^:=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, ":=") },
        RegexPattern { regex: Regex::new(r"^\+\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "++") },
        RegexPattern { regex: Regex::new("^--").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "--") },
        RegexPattern { regex: Regex::new(r"^\+=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "+=") },
        RegexPattern { regex: Regex::new("^-=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "-=") },
        RegexPattern { regex: Regex::new(r"^\*=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "*=") },
        RegexPattern { regex: Regex::new("^/=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "/=") },
        RegexPattern { regex: Regex::new("^%=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "%=") },
        RegexPattern { regex: Regex::new("^&=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "&=") },
        RegexPattern { regex: Regex::new(r"^\|=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "|=") },
        RegexPattern { regex: Regex::new(r"^\^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "^=") },
        RegexPattern { regex: Regex::new("^<<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "<<") },
        RegexPattern { regex: Regex::new("^>>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, ">>") },
        RegexPattern { regex: Regex::new(r"^&\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "&^") },
        RegexPattern { regex: Regex::new("^&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "&&") },
        RegexPattern { regex: Regex::new(r"^\|\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "||") },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "==") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "!=") },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "<=") },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, ">=") },
        RegexPattern { regex: Regex::new("^<-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "<-") },
        RegexPattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "-") },
        RegexPattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "/") },
        RegexPattern { regex: Regex::new("^%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "%") },
        RegexPattern { regex: Regex::new("^&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "&") },
        RegexPattern { regex: Regex::new(r"^\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "|") },
        RegexPattern { regex: Regex::new(r"^\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "^") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "!") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "=") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "<") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, ">") },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Separator, "(") },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Separator, ")") },
        RegexPattern { regex: Regex::new(r"^\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Separator, "[") },
        RegexPattern { regex: Regex::new(r"^\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Separator, "]") },
        RegexPattern { regex: Regex::new(r"^\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Separator, "{") },
        RegexPattern { regex: Regex::new(r"^\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Separator, "}") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Separator, ",") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Separator, ";") },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Separator, ":") },
        RegexPattern { regex: Regex::new(r"^\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Separator, ".") },
    ];
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), LexError> {
    lexer.advance_n(matched.len());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<(), LexError> {
    lexer.push(MK_TOKEN!(classify_word(matched), String::from(matched)));
    lexer.advance_n(matched.len());
    Ok(())
}

fn int_handler(lexer: &mut Lexer, matched: &str) -> Result<(), LexError> {
    lexer.push(MK_TOKEN!(TokenKind::IntLiteral, String::from(matched)));
    lexer.advance_n(matched.len());
    Ok(())
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<(), LexError> {
    let kind = if matched.contains(&['.', 'e', 'E'][..]) {
        TokenKind::FloatLiteral
    } else {
        TokenKind::IntLiteral
    };

    lexer.push(MK_TOKEN!(kind, String::from(matched)));
    lexer.advance_n(matched.len());
    Ok(())
}

/// Shared by the raw-string and interpreted-string patterns: both
/// delimiters are a single byte, and the content is stored undecoded.
fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<(), LexError> {
    let inner = &matched[1..matched.len() - 1];
    lexer.push(MK_TOKEN!(TokenKind::StringLiteral, String::from(inner)));
    lexer.advance_n(matched.len());
    Ok(())
}

fn rune_handler(lexer: &mut Lexer, matched: &str) -> Result<(), LexError> {
    let inner = &matched[1..matched.len() - 1];
    if inner.is_empty() {
        return Err(LexError::EmptyRune);
    }

    lexer.push(MK_TOKEN!(TokenKind::RuneLiteral, String::from(inner)));
    lexer.advance_n(matched.len());
    Ok(())
}

/// Comments are recognised by prefix before the pattern table runs, so the
/// `/` and `/=` operator patterns never see them. Returns the number of
/// bytes to skip, or `None` when the cursor is not at a comment.
fn skip_comment(rest: &str) -> Result<Option<usize>, LexError> {
    if rest.starts_with("//") {
        return Ok(Some(match rest.find('\n') {
            Some(end) => end + 1,
            None => rest.len(),
        }));
    }

    if rest.starts_with("/*") {
        return match rest[2..].find("*/") {
            Some(end) => Ok(Some(end + 4)),
            None => Err(LexError::UnterminatedBlockComment),
        };
    }

    Ok(None)
}

/// Scan `source` into a token stream, stopping at the first lexical error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        if let Some(skip) = skip_comment(lex.remainder())? {
            lex.advance_n(skip);
            continue;
        }

        let mut progressed = false;

        for pattern in PATTERNS.iter() {
            let matched = match pattern.regex.find(lex.remainder()) {
                Some(found) => String::from(found.as_str()),
                None => continue,
            };

            (pattern.handler)(&mut lex, &matched)?;
            progressed = true;
            break;
        }

        if !progressed {
            let token = lex
                .remainder()
                .chars()
                .next()
                .map(String::from)
                .unwrap_or_default();
            return Err(LexError::UnrecognisedToken { token });
        }
    }

    Ok(lex.tokens)
}

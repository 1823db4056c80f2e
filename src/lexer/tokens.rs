use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("break");
        set.insert("case");
        set.insert("chan");
        set.insert("const");
        set.insert("continue");
        set.insert("default");
        set.insert("defer");
        set.insert("else");
        set.insert("fallthrough");
        set.insert("for");
        set.insert("func");
        set.insert("go");
        set.insert("goto");
        set.insert("if");
        set.insert("import");
        set.insert("interface");
        set.insert("map");
        set.insert("package");
        set.insert("range");
        set.insert("return");
        set.insert("select");
        set.insert("struct");
        set.insert("switch");
        set.insert("type");
        set.insert("var");
        set
    };

    /// Every valid operator lexeme. Multi-character operators are built up
    /// one character at a time, so every reachable prefix of an entry must
    /// itself be an entry (`<` before `<<` before `<<=`).
    pub static ref OPERATORS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("+");
        set.insert("-");
        set.insert("*");
        set.insert("/");
        set.insert("%");
        set.insert("&");
        set.insert("|");
        set.insert("^");
        set.insert("<<");
        set.insert(">>");
        set.insert("&^");
        set.insert("+=");
        set.insert("-=");
        set.insert("*=");
        set.insert("/=");
        set.insert("%=");
        set.insert("&=");
        set.insert("|=");
        set.insert("^=");
        set.insert("<<=");
        set.insert(">>=");
        set.insert("&^=");
        set.insert("&&");
        set.insert("||");
        set.insert("<-");
        set.insert("++");
        set.insert("--");
        set.insert("==");
        set.insert("<");
        set.insert(">");
        set.insert("=");
        set.insert("!");
        set.insert("!=");
        set.insert("<=");
        set.insert(">=");
        set.insert(":=");
        set.insert("...");
        set
    };

    pub static ref SEPARATORS: HashSet<char> = {
        let mut set = HashSet::new();
        set.insert('(');
        set.insert(')');
        set.insert('[');
        set.insert(']');
        set.insert('{');
        set.insert('}');
        set.insert(',');
        set.insert(';');
        set.insert(':');
        set.insert('.');
        set
    };
}

/// Characters that can begin an operator lexeme. Note that `:` is in this
/// set and in `SEPARATORS`; the scanners check operators first, so a lone
/// `:` never reaches the separator rule.
pub fn is_operator_start(ch: char) -> bool {
    matches!(
        ch,
        '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^' | '<' | '>' | '!' | '=' | ':' | '~'
    )
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    RuneLiteral,
    BooleanLiteral,
    Operator,
    Separator,
    Error,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::IntLiteral => "Int",
            TokenKind::FloatLiteral => "Float",
            TokenKind::StringLiteral => "String",
            TokenKind::RuneLiteral => "Rune",
            TokenKind::BooleanLiteral => "Boolean",
            TokenKind::Operator => "Operator",
            TokenKind::Separator => "Separator",
            TokenKind::Error => "ERROR",
        };
        write!(f, "{}", name)
    }
}

/// One classified lexeme. `text` is the content exactly as it appeared in
/// the source, except that string and rune literals are stored without
/// their delimiters and with escape sequences undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.text)
    }
}

/// Classify a finished identifier-shaped lexeme against the reserved words.
pub fn classify_word(word: &str) -> TokenKind {
    if KEYWORDS.contains(word) {
        TokenKind::Keyword
    } else if word == "true" || word == "false" {
        TokenKind::BooleanLiteral
    } else {
        TokenKind::Identifier
    }
}

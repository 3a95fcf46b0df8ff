use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("function", TokenKind::Function);
        map.insert("print", TokenKind::Print);
        map.insert("while", TokenKind::While);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Semicolon,
    Colon,
    Question,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,
    StarStar,
    Percent,

    // Reserved
    Let,
    Function,
    Print,
    While,
    True,
    False,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Number => write!(f, "{} ({})", self.kind, self.value),
            _ => write!(f, "{}", self.kind),
        }
    }
}

use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Called with the text matched at the cursor; must advance past it.
pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(&format!("^(?:{})", pattern)).expect("token patterns are valid regexes"),
            handler,
        }
    }
}

// Order matters: the first pattern matching at the cursor wins, so longer
// operators come before their prefixes.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("\\s+", skip_handler),
        RegexPattern::new("//[^\\n]*", skip_handler),
        RegexPattern::new("[0-9]+(\\.[0-9]+)?([Ee][+-]?[0-9]+)?", number_handler),
        RegexPattern::new("\\p{L}[\\p{L}\\p{N}_]*", symbol_handler),
        RegexPattern::new("\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        RegexPattern::new("\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        RegexPattern::new("\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        RegexPattern::new("\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        RegexPattern::new("==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        RegexPattern::new("!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        RegexPattern::new("!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        RegexPattern::new("=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        RegexPattern::new("<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        RegexPattern::new("<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        RegexPattern::new(">=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        RegexPattern::new(">", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        RegexPattern::new("\\|\\|", MK_DEFAULT_HANDLER!(TokenKind::Or, "||")),
        RegexPattern::new("&&", MK_DEFAULT_HANDLER!(TokenKind::And, "&&")),
        RegexPattern::new(";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        RegexPattern::new(":", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        RegexPattern::new("\\?", MK_DEFAULT_HANDLER!(TokenKind::Question, "?")),
        RegexPattern::new(",", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        RegexPattern::new("\\*\\*", MK_DEFAULT_HANDLER!(TokenKind::StarStar, "**")),
        RegexPattern::new("\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        RegexPattern::new("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new("-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        RegexPattern::new("/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        RegexPattern::new("%", MK_DEFAULT_HANDLER!(TokenKind::Percent, "%")),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Rc<String>) -> Lexer {
        Lexer {
            tokens: vec![],
            source: String::from(source),
            pos: 0,
            line: 1,
            column: 1,
            file,
        }
    }

    /// Moves the cursor `n` bytes forward, keeping line and column in step.
    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        for ch in self.source[self.pos..end].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos = end;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position::new(self.pos as u32, self.line, self.column, Rc::clone(&self.file))
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    let start = lexer.position();
    lexer.advance_n(matched.len());
    let end = lexer.position();

    lexer.push(MK_TOKEN!(TokenKind::Number, String::from(matched), Span { start, end }));
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let kind = RESERVED_LOOKUP.get(matched).copied().unwrap_or(TokenKind::Identifier);

    let start = lexer.position();
    lexer.advance_n(matched.len());
    let end = lexer.position();

    lexer.push(MK_TOKEN!(kind, String::from(matched), Span { start, end }));
}

pub fn tokenize(source: &str, file: Rc<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let found = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(lex.remainder())
                .map(|m| (pattern.handler, m.end()))
        });

        match found {
            Some((handler, len)) => {
                let matched = String::from(&lex.remainder()[..len]);
                handler(&mut lex, &matched);
            }
            None => {
                let token = lex.remainder().chars().next().map(String::from).unwrap_or_default();
                return Err(Error::new(ErrorImpl::UnrecognisedToken { token }, lex.position()));
            }
        }
    }

    let eof = lex.position();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), Span { start: eof.clone(), end: eof }));
    trace!(count = lex.tokens.len(), "token stream complete");
    Ok(lex.tokens)
}

//! Parser implementation for building the raw syntax tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and specialized functions for statement parsing.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::statements::BlockStmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and the lookup tables for statements
/// and expressions. The token stream always ends with an `EOF` token, and
/// the cursor never moves past it.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse, terminated by `EOF`
    /// * `file` - Reference-counted string containing the source file name
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the kind of the token after the current one.
    pub fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EOF)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// Returns the consumed token if the current token matches, otherwise
    /// `error` (or a default `UnexpectedToken` error at the current token).
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )),
            }
        } else {
            Ok(self.advance())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Returns the end of the most recently consumed token.
    pub fn get_previous_end(&self) -> Position {
        match self.pos.checked_sub(1) {
            Some(previous) => self.tokens[previous].span.end.clone(),
            None => Position::new(0, 1, 1, Rc::clone(&self.file)),
        }
    }
}

/// Parses a stream of tokens into the raw syntax tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses statements until EOF. The
/// whole program is returned as a single block.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<BlockStmt, Error> {
    if tokens.is_empty() {
        let start = Position::new(0, 1, 1, Rc::clone(&file));
        return Ok(BlockStmt {
            body: vec![],
            span: Span {
                start: start.clone(),
                end: start,
            },
        });
    }

    let mut parser = Parser::new(tokens, Rc::clone(&file));
    create_token_lookups(&mut parser);

    let start = parser.get_position();
    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    Ok(BlockStmt {
        body,
        span: Span {
            start,
            end: parser.get_position(),
        },
    })
}

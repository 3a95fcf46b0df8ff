//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers, fractions and exponents)
//! - Operators and punctuation
//! - Comments
//! - Position tracking
//! - Error cases

use std::rc::Rc;

use crate::errors::errors::ErrorImpl;

use super::{lexer::tokenize, tokens::{Token, TokenKind}};

fn lex(source: &str) -> Vec<Token> {
    tokenize(source, Rc::new("test.bella".to_string())).unwrap()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = lex("let function print while true false");

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Function);
    assert_eq!(tokens[2].kind, TokenKind::Print);
    assert_eq!(tokens[3].kind, TokenKind::While);
    assert_eq!(tokens[4].kind, TokenKind::True);
    assert_eq!(tokens[5].kind, TokenKind::False);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = lex("foo baz_123 trailing_ letter π");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "baz_123");
    assert_eq!(tokens[2].value, "trailing_");
    // Keywords only match whole words
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "letter");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "π");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = lex("42 3.14 0 2.75E+19 1e-3 6E2");

    let values: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Number)
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(values, vec!["42", "3.14", "0", "2.75E+19", "1e-3", "6E2"]);
}

#[test]
fn test_tokenize_operators() {
    let tokens = lex("+ - * / % ** == != < > <= >= = && || ! ? :");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::StarStar,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
            TokenKind::Question,
            TokenKind::Colon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_adjacent_stars() {
    // `***` is `**` followed by `*`
    let tokens = lex("2***3");
    assert_eq!(tokens[1].kind, TokenKind::StarStar);
    assert_eq!(tokens[2].kind, TokenKind::Star);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = lex("( ) { } , ;");

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_comments() {
    let tokens = lex("let x = 5; // this is a comment\nprint x;");

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::Print);
    assert_eq!(tokens[6].value, "x");
}

#[test]
fn test_token_positions() {
    let tokens = lex("let x = 1;\n  print x;");

    assert_eq!(tokens[0].span.start.line, 1);
    assert_eq!(tokens[0].span.start.column, 1);
    assert_eq!(tokens[1].span.start.column, 5);

    let print = &tokens[5];
    assert_eq!(print.kind, TokenKind::Print);
    assert_eq!(print.span.start.line, 2);
    assert_eq!(print.span.start.column, 3);
    assert_eq!(print.span.start.offset, 13);
    assert_eq!(print.span.end.column, 8);
}

#[test]
fn test_columns_count_characters() {
    let tokens = lex("print π;");
    assert_eq!(tokens[2].kind, TokenKind::Semicolon);
    assert_eq!(tokens[2].span.start.column, 8);
}

#[test]
fn test_unrecognised_token() {
    let error = tokenize("let x = 5 @ 3;", Rc::new("test.bella".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.kind(), &ErrorImpl::UnrecognisedToken { token: "@".to_string() });
    assert_eq!(error.get_position().column, 11);
}

#[test]
fn test_identifier_must_start_with_letter() {
    let error = tokenize("let _x = 1;", Rc::new("test.bella".to_string())).unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::UnrecognisedToken { token: "_".to_string() });
    assert_eq!(error.get_position().column, 5);
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = lex("   \n ");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

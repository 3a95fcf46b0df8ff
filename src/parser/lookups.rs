use std::collections::HashMap;

use crate::{ast::ast::{ExprWrapper, StmtWrapper}, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Conditional,
    LogicalOr,
    LogicalAnd,
    Relational,
    Additive,
    Multiplicative,
    Exponent,
    Unary,
    Call,
    Primary
}

pub type StmtHandler = fn(&mut Parser) -> Result<StmtWrapper, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<ExprWrapper, Error>;
pub type LEDHandler = fn(&mut Parser, ExprWrapper, BindingPower) -> Result<ExprWrapper, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    parser.led(TokenKind::Question, BindingPower::Conditional, parse_conditional_expr);

    // Logical
    parser.led(TokenKind::Or, BindingPower::LogicalOr, parse_binary_expr);
    parser.led(TokenKind::And, BindingPower::LogicalAnd, parse_binary_expr);

    // Relational
    parser.led(TokenKind::Less, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::LessEquals, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Greater, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Equals, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Relational, parse_binary_expr);

    // Additive, multiplicative and exponent
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Percent, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::StarStar, BindingPower::Exponent, parse_exponent_expr);

    parser.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::True, parse_primary_expr);
    parser.nud(TokenKind::False, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::Not, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_var_decl_stmt);
    parser.stmt(TokenKind::Function, parse_fn_decl_stmt);
    parser.stmt(TokenKind::Print, parse_print_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

//! Decorated program tree definitions.
//!
//! This module contains the tree produced by the analyzer and rewritten by
//! the optimizer. It mirrors the raw syntax tree, except that:
//! - Every identifier occurrence is a shared reference to its entity
//! - Operators are resolved to closed enums
//! - Source spans are gone; the tree is already known to be valid
//!
//! A renderer can walk this tree without any further name lookup.

use std::{fmt::Display, rc::Rc};

use crate::{
    entities::entities::{Function, Variable},
    lexer::tokens::TokenKind,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VariableDeclaration {
        variable: Rc<Variable>,
        initializer: Expression,
    },
    FunctionDeclaration {
        function: Rc<Function>,
        parameters: Vec<Rc<Variable>>,
        body: Expression,
    },
    Assignment {
        target: Rc<Variable>,
        source: Expression,
    },
    Print(Expression),
    While {
        test: Expression,
        body: Vec<Statement>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Boolean(bool),
    Variable(Rc<Variable>),
    Binary {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Unary {
        operator: UnaryOperator,
        operand: Box<Expression>,
    },
    Conditional {
        test: Box<Expression>,
        consequent: Box<Expression>,
        alternate: Box<Expression>,
    },
    Call {
        callee: Rc<Function>,
        arguments: Vec<Expression>,
    },
}

impl Expression {
    pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(operator: UnaryOperator, operand: Expression) -> Self {
        Expression::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn conditional(test: Expression, consequent: Expression, alternate: Expression) -> Self {
        Expression::Conditional {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Expression::Number(_) | Expression::Boolean(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Or,
    And,
    Less,
    LessEqual,
    Equal,
    NotEqual,
    GreaterEqual,
    Greater,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl BinaryOperator {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        let operator = match kind {
            TokenKind::Or => BinaryOperator::Or,
            TokenKind::And => BinaryOperator::And,
            TokenKind::Less => BinaryOperator::Less,
            TokenKind::LessEquals => BinaryOperator::LessEqual,
            TokenKind::Equals => BinaryOperator::Equal,
            TokenKind::NotEquals => BinaryOperator::NotEqual,
            TokenKind::GreaterEquals => BinaryOperator::GreaterEqual,
            TokenKind::Greater => BinaryOperator::Greater,
            TokenKind::Plus => BinaryOperator::Add,
            TokenKind::Dash => BinaryOperator::Subtract,
            TokenKind::Star => BinaryOperator::Multiply,
            TokenKind::Slash => BinaryOperator::Divide,
            TokenKind::Percent => BinaryOperator::Modulo,
            TokenKind::StarStar => BinaryOperator::Power,
            _ => return None,
        };
        Some(operator)
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOperator::Or => "||",
            BinaryOperator::And => "&&",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::Greater => ">",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Power => "**",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
    Not,
}

impl UnaryOperator {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Dash => Some(UnaryOperator::Negate),
            TokenKind::Not => Some(UnaryOperator::Not),
            _ => None,
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Negate => write!(f, "-"),
            UnaryOperator::Not => write!(f, "!"),
        }
    }
}

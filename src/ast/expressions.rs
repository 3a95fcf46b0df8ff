use std::any::Any;

use crate::{lexer::tokens::Token, Span};

use super::ast::{Expr, ExprType, ExprWrapper};

// LITERALS

/// Number Expression
/// Represents a numeric literal in the syntax tree.
#[derive(Debug, Clone)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

impl Expr for NumberExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Number
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Boolean Expression
/// Represents `true` or `false` in the syntax tree.
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub value: bool,
    pub span: Span,
}

impl Expr for BooleanExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Boolean
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Symbol Expression
/// Represents an identifier occurrence. Also used for declared names, so the
/// analyzer can point errors at the exact token.
#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

impl Expr for SymbolExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Symbol
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

// COMPLEX

/// Binary Expression
/// Represents an infix operation between two expressions.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: ExprWrapper,
    pub operator: Token,
    pub right: ExprWrapper,
    pub span: Span,
}

impl Expr for BinaryExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Binary
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Prefix Expression
/// Represents `-e` or `!e`.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right_expr: ExprWrapper,
    pub span: Span,
}

impl Expr for PrefixExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Prefix
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Conditional Expression
/// Represents `test ? consequent : alternate`.
#[derive(Debug, Clone)]
pub struct ConditionalExpr {
    pub test: ExprWrapper,
    pub consequent: ExprWrapper,
    pub alternate: ExprWrapper,
    pub span: Span,
}

impl Expr for ConditionalExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Conditional
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Call Expression
/// Represents a function call. Only a bare identifier can be called.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub callee: SymbolExpr,
    pub arguments: Vec<ExprWrapper>,
    pub span: Span,
}

impl Expr for CallExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Call
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

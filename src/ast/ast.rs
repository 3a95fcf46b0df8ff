use std::{any::Any, fmt::Debug, ops::Deref};

use crate::Span;

/// Statement Types
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum StmtType {
    BlockStmt,
    VarDeclStmt,
    FnDeclStmt,
    AssignmentStmt,
    PrintStmt,
    WhileStmt,
}

/// Statement Trait
///
/// Defines the behavior of all statement types in the syntax tree.
pub trait Stmt: Debug {
    /// Returns the type of the statement.
    fn get_stmt_type(&self) -> StmtType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the statement into a StmtWrapper.
    /// Clone cannot be derived for certain trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> StmtWrapper;
    /// Returns the span of the statement.
    fn get_span(&self) -> &Span;
}

/// Statement Wrapper
///
/// A wrapper that allows for any statement kind to be stored with helper methods
#[derive(Debug)]
pub struct StmtWrapper(Box<dyn Stmt>);

impl StmtWrapper {
    pub fn new<T: Stmt + 'static>(stmt: T) -> Self {
        StmtWrapper(Box::new(stmt))
    }

    /// Returns the concrete node behind the wrapper.
    ///
    /// Panics if `T` is not the node type the wrapper was built from; callers
    /// dispatch on `get_stmt_type()` first, so a mismatch is a bug in the tree.
    pub fn downcast<T: 'static>(&self) -> &T {
        match self.0.as_any().downcast_ref::<T>() {
            Some(stmt) => stmt,
            None => unreachable!(
                "{:?} node is not a {}",
                self.0.get_stmt_type(),
                std::any::type_name::<T>()
            ),
        }
    }
}

impl Deref for StmtWrapper {
    type Target = Box<dyn Stmt>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Stmt for StmtWrapper {
    fn get_stmt_type(&self) -> StmtType {
        self.0.get_stmt_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        self.0.clone_wrapper()
    }
    fn get_span(&self) -> &Span {
        self.0.get_span()
    }
}

impl Clone for StmtWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

/// Expression Types
///
/// Defines the various kinds of expressions in the syntax tree.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ExprType {
    Number,
    Boolean,
    Symbol,
    Binary,
    Prefix,
    Conditional,
    Call,
}

pub trait Expr: Debug {
    /// Returns the expression type of the expression.
    fn get_expr_type(&self) -> ExprType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the expression into an ExprWrapper.
    /// Clone cannot be derived for certain trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> ExprWrapper;
    /// Returns the span of the expression.
    fn get_span(&self) -> &Span;
}

/// Expression Wrapper
///
/// A wrapper that allows for any expression kind to be stored with helper methods
#[derive(Debug)]
pub struct ExprWrapper(Box<dyn Expr>);

impl ExprWrapper {
    pub fn new<T: Expr + 'static>(expression: T) -> Self {
        ExprWrapper(Box::new(expression))
    }

    /// Returns the concrete node behind the wrapper.
    ///
    /// Panics if `T` is not the node type the wrapper was built from.
    pub fn downcast<T: 'static>(&self) -> &T {
        match self.0.as_any().downcast_ref::<T>() {
            Some(expr) => expr,
            None => unreachable!(
                "{:?} node is not a {}",
                self.0.get_expr_type(),
                std::any::type_name::<T>()
            ),
        }
    }
}

impl Deref for ExprWrapper {
    type Target = Box<dyn Expr>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Expr for ExprWrapper {
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn get_expr_type(&self) -> ExprType {
        self.0.get_expr_type()
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        self.0.clone_wrapper()
    }
    fn get_span(&self) -> &Span {
        self.0.get_span()
    }
}

impl Clone for ExprWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

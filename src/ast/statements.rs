use std::{any::Any, slice::Iter};

use crate::Span;

use super::{
    ast::{ExprWrapper, Stmt, StmtType, StmtWrapper},
    expressions::SymbolExpr,
};

/// A brace-delimited statement list. The whole program is one of these too.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<StmtWrapper>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.body.iter()
    }
}

impl Stmt for BlockStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::BlockStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `let identifier = assigned_value;`
#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub identifier: SymbolExpr,
    pub assigned_value: ExprWrapper,
    pub span: Span,
}

impl Stmt for VarDeclStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::VarDeclStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `function identifier(parameters) = body;`
#[derive(Debug, Clone)]
pub struct FnDeclStmt {
    pub identifier: SymbolExpr,
    pub parameters: Vec<SymbolExpr>,
    pub body: ExprWrapper,
    pub span: Span,
}

impl Stmt for FnDeclStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::FnDeclStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `assignee = value;`
#[derive(Debug, Clone)]
pub struct AssignmentStmt {
    pub assignee: SymbolExpr,
    pub value: ExprWrapper,
    pub span: Span,
}

impl Stmt for AssignmentStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::AssignmentStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `print argument;`
#[derive(Debug, Clone)]
pub struct PrintStmt {
    pub argument: ExprWrapper,
    pub span: Span,
}

impl Stmt for PrintStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::PrintStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `while condition { body }`
#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: ExprWrapper,
    pub body: BlockStmt,
    pub span: Span,
}

impl Stmt for WhileStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::WhileStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

//! Semantic analysis for Bella programs.
//!
//! The analyzer walks the raw syntax tree produced by the parser and turns it
//! into a decorated program tree. Along the way it:
//!
//! - Resolves every identifier to the entity it refers to
//! - Rejects duplicate declarations within one scope
//! - Checks that variables are used as variables and functions as functions
//! - Checks call arity and writes to read-only variables
//!
//! Analysis stops at the first error.

pub mod analyzer;
pub mod decorated_ast;
pub mod scope;

#[cfg(test)]
mod tests;

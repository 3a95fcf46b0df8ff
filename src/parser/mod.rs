//! Parser module for building the raw syntax tree.
//!
//! This module contains the parser that transforms a stream of tokens
//! into a raw syntax tree. It uses a Pratt parser for expressions
//! with operator precedence and handles:
//!
//! - Statement parsing (declarations, assignments, `print`, `while`)
//! - Expression parsing (binary and prefix operators, conditionals, calls, literals)
//! - Error reporting at the first unexpected token
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the front end and
//! the semantic analyzer. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing, parsing and analysis
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

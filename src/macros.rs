//! Utility macros for the compiler.
//!
//! This module defines helper macros used throughout the front end:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for simple tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for fixed-text tokens.
///
/// Generates a handler function that records the start position, advances
/// the lexer past the token and pushes a token spanning the consumed text.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal string value (used for length calculation)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _matched: &str| {
            let start = lexer.position();
            lexer.advance_n($value.len());
            let end = lexer.position();
            lexer.push(MK_TOKEN!($kind, String::from($value), Span { start, end }));
        }
    };
}

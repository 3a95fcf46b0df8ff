#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc, time::Instant};

use tracing::debug;

use crate::{
    analyzer::{analyzer::analyze, decorated_ast::Program},
    ast::statements::BlockStmt,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    optimizer::optimizer::optimize,
    parser::parser::parse,
};

pub mod analyzer;
pub mod ast;
pub mod entities;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod optimizer;
pub mod parser;

extern crate regex;

/// A point in a source file. `offset` is a byte offset, `line` and
/// `column` are 1-based and counted in characters.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(offset: u32, line: u32, column: u32, file: Rc<String>) -> Self {
        Position {
            offset,
            line,
            column,
            file,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// How far down the pipeline `compile` should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Stage {
    Parsed,
    Analyzed,
    #[default]
    Optimized,
}

#[derive(Debug)]
pub enum Output {
    Parsed(BlockStmt),
    Analyzed(Program),
    Optimized(Program),
}

/// Runs source text through the front end, the analyzer and (optionally)
/// the optimizer, stopping after `stage`.
pub fn compile(source: &str, file: &str, stage: Stage) -> Result<Output, Error> {
    let start = Instant::now();
    let file = Rc::new(String::from(file));

    let tokens = tokenize(source, Rc::clone(&file))?;
    debug!(tokens = tokens.len(), elapsed = ?start.elapsed(), "tokenized");

    let parse_start = Instant::now();
    let syntax_tree = parse(tokens, Rc::clone(&file))?;
    debug!(statements = syntax_tree.body.len(), elapsed = ?parse_start.elapsed(), "parsed");

    if stage == Stage::Parsed {
        return Ok(Output::Parsed(syntax_tree));
    }

    let analyze_start = Instant::now();
    let program = analyze(&syntax_tree)?;
    debug!(statements = program.statements.len(), elapsed = ?analyze_start.elapsed(), "analyzed");

    if stage == Stage::Analyzed {
        return Ok(Output::Analyzed(program));
    }

    let optimize_start = Instant::now();
    let program = optimize(program);
    debug!(statements = program.statements.len(), elapsed = ?optimize_start.elapsed(), "optimized");

    Ok(Output::Optimized(program))
}

/// Returns the text of the 1-based `line` in `source`, without its line terminator.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }
    source.lines().nth(line as usize - 1)
}

/// Renders an error as a caret diagnostic:
///
/// ```text
/// Error: UndeclaredName (Identifier `y` not declared)
/// -> program.bella
///    |
///  3 | print y;
///    | ------^
/// ```
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    let position = error.get_position();
    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file));

    let Some(line_text) = get_line(source, position.line) else {
        return out;
    };

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_line() {
        let source = "Hello, world!\nsecond\n\nTesting { }\n";
        assert_eq!(get_line(source, 1), Some("Hello, world!"));
        assert_eq!(get_line(source, 4), Some("Testing { }"));
        assert_eq!(get_line(source, 9), None);
        assert_eq!(get_line(source, 0), None);
    }

    #[test]
    fn test_format_error_points_at_column() {
        let source = "let x = 1;\n  print y;\n";
        let error = compile(source, "test.bella", Stage::Analyzed).unwrap_err();
        let rendered = format_error(&error, source, "test.bella");

        assert!(rendered.starts_with("Error: UndeclaredName"));
        assert!(rendered.contains("-> test.bella"));
        assert!(rendered.contains("2 | print y;"));
        assert!(rendered.contains("| ------^"));
    }

    #[test]
    fn test_compile_stops_at_requested_stage() {
        let source = "print 1 + 2;";
        assert!(matches!(
            compile(source, "test.bella", Stage::Parsed),
            Ok(Output::Parsed(_))
        ));
        assert!(matches!(
            compile(source, "test.bella", Stage::Analyzed),
            Ok(Output::Analyzed(_))
        ));
        assert!(matches!(
            compile(source, "test.bella", Stage::Optimized),
            Ok(Output::Optimized(_))
        ));
    }
}

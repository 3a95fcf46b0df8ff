use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::DuplicateDeclaration { .. } => "DuplicateDeclaration",
            ErrorImpl::UndeclaredName { .. } => "UndeclaredName",
            ErrorImpl::WrongEntityKind { .. } => "WrongEntityKind",
            ErrorImpl::ReadOnlyAssignment { .. } => "ReadOnlyAssignment",
            ErrorImpl::ArityMismatch { .. } => "ArityMismatch",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::DuplicateDeclaration { name } => {
                ErrorTip::Suggestion(format!("Identifier `{}` already declared in this scope", name))
            }
            ErrorImpl::UndeclaredName { name } => {
                ErrorTip::Suggestion(format!("Identifier `{}` not declared", name))
            }
            ErrorImpl::WrongEntityKind {
                name,
                expected,
                found,
            } => ErrorTip::Suggestion(format!(
                "`{}` is a {}, expected a {}",
                name, found, expected
            )),
            ErrorImpl::ReadOnlyAssignment { name } => {
                ErrorTip::Suggestion(format!("Cannot assign to read-only variable `{}`", name))
            }
            ErrorImpl::ArityMismatch { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {} argument(s), received {}",
                expected, received
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// The kind of entity a name was expected to resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Variable,
    Function,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Variable => write!(f, "variable"),
            EntityKind::Function => write!(f, "function"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("identifier {name:?} already declared")]
    DuplicateDeclaration { name: String },
    #[error("identifier {name:?} not declared")]
    UndeclaredName { name: String },
    #[error("{name:?} is a {found}, expected a {expected}")]
    WrongEntityKind {
        name: String,
        expected: EntityKind,
        found: EntityKind,
    },
    #[error("cannot assign to read-only variable {name:?}")]
    ReadOnlyAssignment { name: String },
    #[error("expected {expected} argument(s), received {received}")]
    ArityMismatch { expected: usize, received: usize },
}

use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {}:{}", .position.1, .position.0)]
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

    /// Shorthand for the parser's single failure kind.
    pub fn syntax(token: impl Into<String>, reason: impl Into<String>, position: Position) -> Self {
        Error::new(
            ErrorImpl::SyntaxError {
                token: token.into(),
                reason: reason.into(),
            },
            position,
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedLiteral { .. } => "UnterminatedLiteral",
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
        }
    }

    /// The human-readable reason, e.g. "expected ;".
    pub fn get_reason(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "unrecognised token",
            ErrorImpl::UnterminatedLiteral { .. } => "unterminated literal",
            ErrorImpl::SyntaxError { reason, .. } => reason,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedLiteral { token } => ErrorTip::Suggestion(format!(
                "Literal starting with `{}` is never closed",
                token
            )),
            ErrorImpl::SyntaxError { token, reason } => {
                ErrorTip::Suggestion(format!("{}, found `{}`", reason, token))
            }
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated literal: {token:?}")]
    UnterminatedLiteral { token: String },
    #[error("syntax error ({reason}): {token:?}")]
    SyntaxError { token: String, reason: String },
}

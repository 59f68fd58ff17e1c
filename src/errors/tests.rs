//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::sync::Arc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Arc::new("test.js".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Arc::new("test.js".to_string()));
    let error = Error::syntax("foo", "expected ;", pos.clone());

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_syntax_error_reason() {
    let error = Error::syntax(
        "=",
        "left-hand-side is not assignable",
        Position(0, Arc::new("test.js".to_string())),
    );

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(error.get_reason(), "left-hand-side is not assignable");
}

#[test]
fn test_unterminated_literal_error() {
    let error = Error::new(
        ErrorImpl::UnterminatedLiteral {
            token: "\"abc".to_string(),
        },
        Position(0, Arc::new("test.js".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnterminatedLiteral");
    assert_eq!(error.get_reason(), "unterminated literal");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0, Arc::new("test.js".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::syntax("}", "expected ;", Position(0, Arc::new("test.js".to_string())));

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "expected ;, found `}`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::syntax("1", "expected identifier", Position(7, Arc::new("a.js".to_string())));

    assert_eq!(
        error.to_string(),
        "syntax error (expected identifier): \"1\" at a.js:7"
    );
}

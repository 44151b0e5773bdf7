//! Unit tests for diagnostics.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            actual: TokenKind::Int,
        },
        Position(6, Rc::new("test.dojo".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be ASSIGN, got INT instead"
    );
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Semicolon,
        },
        Position(42, Rc::new("test.dojo".to_string())),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(*error.get_position().1, "test.dojo");
}

#[test]
fn test_no_prefix_parse_fn_message() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Semicolon,
        },
        Position(0, Rc::new("test.dojo".to_string())),
    );

    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
    assert_eq!(error.to_string(), "no prefix parse function for SEMICOLON found");
}

#[test]
fn test_integer_parse_error_message() {
    let error = Error::new(
        ErrorImpl::IntegerParseError {
            literal: "92233720368547758070".to_string(),
        },
        Position(0, Rc::new("test.dojo".to_string())),
    );

    assert_eq!(error.get_error_name(), "IntegerParseError");
    assert_eq!(
        error.to_string(),
        "could not parse \"92233720368547758070\" as integer"
    );
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("integer limit")),
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_illegal_token_tip() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Illegal,
        },
        Position(0, Rc::new("test.dojo".to_string())),
    );

    assert_eq!(error.get_tip().to_string(), "unrecognised character in expression");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_nesting_too_deep_has_no_tip() {
    let error = Error::new(
        ErrorImpl::NestingTooDeep { limit: 256 },
        Position(3, Rc::new("test.dojo".to_string())),
    );

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "expression nested deeper than 256 levels");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

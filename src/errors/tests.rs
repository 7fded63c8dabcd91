//! Unit tests for error handling.

use crate::errors::diagnostics::Diagnostics;
use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.cl".to_string()))
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::MissingPrefixHandler {
            kind: TokenKind::RParen,
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_error_name(), "MissingPrefixHandler");
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::RBrace,
            found: TokenKind::EndOfInput,
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be }, got EOF instead"
    );
}

#[test]
fn test_missing_prefix_message() {
    let error = Error::new(
        ErrorImpl::MissingPrefixHandler {
            kind: TokenKind::Illegal,
        },
        at(0),
    );

    assert_eq!(error.to_string(), "no prefix parse function for ILLEGAL found");
}

#[test]
fn test_integer_parse_message() {
    let error = Error::new(
        ErrorImpl::IntegerParseError {
            literal: "99999999999999999999".to_string(),
        },
        at(0),
    );

    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 8 }, at(0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.to_string(), "expression nesting exceeds the limit of 8");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::MissingPrefixHandler {
            kind: TokenKind::Star,
        },
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "`*` cannot start an expression"),
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
fn test_diagnostics_keep_report_order() {
    let mut diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());

    diagnostics.push(Error::new(
        ErrorImpl::MissingPrefixHandler {
            kind: TokenKind::RParen,
        },
        at(3),
    ));
    diagnostics.push(Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Assign,
        },
        at(1),
    ));

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(
        diagnostics.messages(),
        vec![
            "no prefix parse function for ) found".to_string(),
            "expected next token to be IDENT, got = instead".to_string(),
        ]
    );
    assert_eq!(
        diagnostics
            .iter()
            .map(|error| error.get_position().0)
            .collect::<Vec<_>>(),
        vec![3, 1]
    );
}

//! Unit tests for diagnostics.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.lc".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "`;` after expression".to_string(),
            found: "}".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.message(), "expected `;` after expression, found `}`");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_invalid_assignment_target() {
    let error = Error::new(
        ErrorImpl::InvalidAssignmentTarget {
            target: "5".to_string(),
        },
        at(2),
    );

    assert_eq!(error.get_error_name(), "InvalidAssignmentTarget");
    assert_eq!(error.message(), "invalid assignment target: `5`");
}

#[test]
fn test_missing_expression_tips() {
    let decrement = Error::new(
        ErrorImpl::MissingExpression {
            found: "--".to_string(),
        },
        at(0),
    );
    assert!(decrement.get_tip().to_string().contains("- -x"));

    let operator = Error::new(
        ErrorImpl::MissingExpression {
            found: "*".to_string(),
        },
        at(0),
    );
    assert!(operator.get_tip().to_string().contains("left operand"));

    let other = Error::new(
        ErrorImpl::MissingExpression {
            found: "else".to_string(),
        },
        at(0),
    );
    assert!(matches!(other.get_tip(), ErrorTip::None));
}

#[test]
fn test_unterminated_block_names_construct() {
    let error = Error::new(
        ErrorImpl::UnterminatedBlock {
            construct: "class body".to_string(),
        },
        at(0),
    );

    assert_eq!(error.message(), "unterminated class body");
    assert_eq!(error.get_tip().to_string(), "add a closing `}` to the class body");
}

#[test]
fn test_nesting_too_deep_is_fatal() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 64 }, at(64));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.message(), "nesting deeper than 64 levels");
    assert!(error.is_fatal());

    let error = Error::new(ErrorImpl::TooManyArguments { limit: 255 }, at(0));
    assert!(!error.is_fatal());
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::TrailingTokensAfterProgram {
            found: "}".to_string(),
        },
        at(7),
    );

    assert_eq!(
        error.to_string(),
        "unexpected `}` after the end of the program at test.lc:7"
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A diagnostic: what went wrong and where.
#[derive(Debug, Clone, PartialEq)]
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

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::InvalidAssignmentTarget { .. } => "InvalidAssignmentTarget",
            ErrorImpl::UnterminatedBlock { .. } => "UnterminatedBlock",
            ErrorImpl::MissingExpression { .. } => "MissingExpression",
            ErrorImpl::TrailingTokensAfterProgram { .. } => "TrailingTokensAfterProgram",
            ErrorImpl::TooManyArguments { .. } => "TooManyArguments",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    /// Errors that end the parse instead of being recovered from.
    pub fn is_fatal(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::NestingTooDeep { .. })
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("add a closing `\"`"))
            }
            ErrorImpl::UnexpectedToken { found, .. } if found == "}" || found == "EOF" => {
                ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
            }
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::InvalidAssignmentTarget { .. } => ErrorTip::Suggestion(String::from(
                "only a plain variable name can be assigned to",
            )),
            ErrorImpl::UnterminatedBlock { construct } => {
                ErrorTip::Suggestion(format!("add a closing `}}` to the {}", construct))
            }
            ErrorImpl::MissingExpression { found } => match found.as_str() {
                "--" => ErrorTip::Suggestion(String::from(
                    "there is no prefix decrement, write `- -x` to negate twice",
                )),
                "++" => ErrorTip::Suggestion(String::from(
                    "increment is postfix only, write `x++`",
                )),
                "+" | "*" | "/" | "==" | "!=" | "<" | "<=" | ">" | ">=" => {
                    ErrorTip::Suggestion(format!(
                        "binary operator `{}` is missing its left operand",
                        found
                    ))
                }
                ";" => ErrorTip::Suggestion(String::from(
                    "`return` and `print` always need a value",
                )),
                _ => ErrorTip::None,
            },
            ErrorImpl::TrailingTokensAfterProgram { found } if found == "}" => {
                ErrorTip::Suggestion(String::from("this `}` has no matching `{`"))
            }
            ErrorImpl::TrailingTokensAfterProgram { .. } => ErrorTip::None,
            ErrorImpl::TooManyArguments { limit } => {
                ErrorTip::Suggestion(format!("split the call, at most {} are allowed", limit))
            }
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "move the inner part into a variable or a function",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {}

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
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("expected {expected}, found `{found}`")]
    UnexpectedToken { expected: String, found: String },
    #[error("invalid assignment target: `{target}`")]
    InvalidAssignmentTarget { target: String },
    #[error("unterminated {construct}")]
    UnterminatedBlock { construct: String },
    #[error("expected expression, found `{found}`")]
    MissingExpression { found: String },
    #[error("unexpected `{found}` after the end of the program")]
    TrailingTokensAfterProgram { found: String },
    #[error("more than {limit} arguments")]
    TooManyArguments { limit: usize },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

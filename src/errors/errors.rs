use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// The first point at which tokenization failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at line {}, column {}", .position.line, .position.column)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

pub type LexicalError = Error;

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

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The character that broke the match, `None` if input ended mid-pattern.
    pub fn character(&self) -> Option<char> {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token } => Some(*token),
            ErrorImpl::IncompleteOperator { found, .. } => *found,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::IncompleteOperator { .. } => "IncompleteOperator",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::IncompleteOperator { operator, .. } => ErrorTip::Suggestion(format!(
                "`{}` is only valid as `{}`",
                operator,
                paired_operator(*operator)
            )),
        }
    }
}

fn paired_operator(operator: char) -> &'static str {
    match operator {
        '!' => "!=",
        '&' => "&&",
        '|' => "||",
        _ => "a two-character operator",
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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected character {token:?}")]
    UnrecognisedToken { token: char },
    #[error("incomplete operator {operator:?}, found {}", describe_found(.found))]
    IncompleteOperator { operator: char, found: Option<char> },
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{:?}", c),
        None => String::from("end of input"),
    }
}

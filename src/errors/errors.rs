use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A recoverable parse diagnostic.
///
/// Diagnostics never stop the parser; they are collected in order and read
/// back once the whole program has been parsed.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
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

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::Suggestion(self.to_string()),
            ErrorImpl::NoPrefixParseFn { kind: TokenKind::Illegal } => {
                ErrorTip::Suggestion(String::from("unrecognised character in expression"))
            }
            ErrorImpl::NoPrefixParseFn { .. } => ErrorTip::Suggestion(self.to_string()),
            ErrorImpl::IntegerParseError { literal } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::None,
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
    #[error("expected next token to be {expected}, got {actual} instead")]
    UnexpectedToken { expected: TokenKind, actual: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParseError { literal: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

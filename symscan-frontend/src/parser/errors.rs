//! Parse error types
//!
//! This module defines all error types that can occur during parsing.

use crate::lexer::Token;
use symscan_common::{CompilerError, SourceLocation};
use thiserror::Error;

/// Parse error types specific to the parser
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error("Expected {expected}, found {}", found.token_type)]
    UnexpectedToken {
        expected: String,
        found: Token,
    },
    #[error("Unexpected end of file, expected {expected}")]
    UnexpectedEndOfFile {
        expected: String,
        location: SourceLocation,
    },
    #[error("{message}")]
    InvalidExpression {
        message: String,
        location: SourceLocation,
    },
    #[error("{message}")]
    InvalidDeclaration {
        message: String,
        location: SourceLocation,
    },
}

impl ParseError {
    /// Where the error was detected
    pub fn location(&self) -> &SourceLocation {
        match self {
            ParseError::UnexpectedToken { found, .. } => &found.span.start,
            ParseError::UnexpectedEndOfFile { location, .. }
            | ParseError::InvalidExpression { location, .. }
            | ParseError::InvalidDeclaration { location, .. } => location,
        }
    }
}

impl From<ParseError> for CompilerError {
    fn from(err: ParseError) -> Self {
        let location = err.location().clone();
        CompilerError::parse_error(err.to_string(), location)
    }
}

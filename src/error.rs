//! Error type definitions
//!
//! Defines all error types used in sqlfp.

use thiserror::Error;

/// Errors that occur during lexing (tokenization)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LexError {
    #[error("Unexpected character: '{0}' (position: {1})")]
    UnexpectedCharacter(char, usize),

    #[error("Unterminated string literal (start position: {0})")]
    UnterminatedString(usize),

    #[error("Unterminated quoted identifier (start position: {0})")]
    UnterminatedQuotedIdentifier(usize),

    #[error("Unterminated block comment (start position: {0})")]
    UnterminatedBlockComment(usize),

    #[error("Invalid number format: '{0}' (position: {1})")]
    InvalidNumber(String, usize),
}

/// Errors that occur during parsing
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("Expected: {expected}, found: {found} (position: {position})")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: usize,
    },

    #[error("'{construct}' is not supported in the {dialect} dialect (position: {position})")]
    UnsupportedConstruct {
        construct: String,
        dialect: String,
        position: usize,
    },

    #[error("Lexing error: {0}")]
    LexError(#[from] LexError),

    #[error("Unexpected end of input (position: {0})")]
    UnexpectedEof(usize),
}

/// Unified error returned by the public normalization entry points.
///
/// There are exactly two user-visible failure kinds: the dialect name did
/// not resolve, or the statement could not be parsed.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("Unknown dialect: '{0}'")]
    UnknownDialect(String),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type aliases
pub type LexResult<T> = Result<T, LexError>;
pub type ParseResult<T> = Result<T, ParseError>;

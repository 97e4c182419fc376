//! # sqlfp
//!
//! A SQL fingerprinting engine: parses a statement under one of several
//! dialects, rewrites away superficial variation (literal values,
//! whitespace, comments, optional keywords, redundant parentheses) and
//! returns the canonical form together with a stable SHA-256 fingerprint.
//!
//! ## Usage Example
//!
//! ```rust
//! use sqlfp::normalize;
//!
//! let result = normalize("SELECT * FROM users WHERE id = 123", "postgres").unwrap();
//! assert_eq!(result.normalized, "SELECT * FROM users WHERE id = ?");
//! assert_eq!(result.params, ["123"]);
//! assert_eq!(result.hash.len(), 64);
//! ```
//!
//! Two statements that differ only in literals or formatting share one
//! `hash`; statements that differ in structure do not.

pub mod dialect;
pub mod error;
pub mod fingerprint;
pub mod lexer;
pub mod normalizer;
pub mod parser;
pub mod unparser;

// CLI module (included when building the binary)
#[cfg(feature = "cli")]
pub mod cli;

// Re-export public API
pub use crate::dialect::{Dialect, DialectDescriptor};
pub use crate::error::{LexError, NormalizeError, ParseError};
pub use crate::fingerprint::NormalizeResult;
pub use crate::lexer::{Lexer, Token};
pub use crate::parser::{Parser, Statement};

/// The placeholder text used when the caller does not choose one.
pub const DEFAULT_PLACEHOLDER: &str = "?";

/// Main fingerprinting struct
///
/// Binds a dialect descriptor and a placeholder, and exposes the pipeline
/// stages individually for callers that want them.
pub struct Fingerprinter {
    descriptor: &'static DialectDescriptor,
    placeholder: String,
}

impl Fingerprinter {
    /// Creates a fingerprinter for a dialect name.
    ///
    /// Names are matched ASCII case-insensitively; `postgresql` and
    /// `mariadb` alias `postgres` and `mysql`.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::UnknownDialect`] when the name does not
    /// resolve.
    pub fn new(dialect_name: &str) -> Result<Self, NormalizeError> {
        let descriptor = dialect::resolve(dialect_name)
            .ok_or_else(|| NormalizeError::UnknownDialect(dialect_name.to_string()))?;
        Ok(Self {
            descriptor,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        })
    }

    /// Replaces the placeholder text extracted literals are rewritten to.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// The resolved dialect descriptor.
    pub fn dialect(&self) -> &'static DialectDescriptor {
        self.descriptor
    }

    /// Parses a statement without normalizing it.
    pub fn parse(&self, sql: &str) -> Result<Statement, ParseError> {
        Parser::parse_sql(sql, self.descriptor)
    }

    /// Runs the full pipeline: parse, rewrite, unparse, hash.
    pub fn normalize(&self, sql: &str) -> Result<NormalizeResult, NormalizeError> {
        let statement = self.parse(sql)?;
        let (statement, params) = normalizer::normalize_statement(statement, &self.placeholder);
        let normalized = unparser::emit(&statement, self.descriptor);
        Ok(fingerprint::assemble(sql, normalized, params))
    }
}

/// Normalizes a statement with the default `?` placeholder.
///
/// # Errors
///
/// [`NormalizeError::UnknownDialect`] when the dialect name does not
/// resolve, [`NormalizeError::Parse`] when the statement cannot be parsed.
pub fn normalize(sql: &str, dialect: &str) -> Result<NormalizeResult, NormalizeError> {
    Fingerprinter::new(dialect)?.normalize(sql)
}

/// Normalizes a statement with a caller-chosen placeholder.
pub fn normalize_with_placeholder(
    sql: &str,
    dialect: &str,
    placeholder: &str,
) -> Result<NormalizeResult, NormalizeError> {
    Fingerprinter::new(dialect)?
        .with_placeholder(placeholder)
        .normalize(sql)
}

//! Error types shared by the lexer and parser.
//!
//! Both lexical and syntactic failures are reported as a
//! [`SyntaxError`]: a message plus the [`SourceLocation`] of the first
//! character that could not be validly consumed. Every failure is a
//! deterministic function of the input text; there are no transient or
//! retryable modes.

use thiserror::Error;

use crate::location::SourceLocation;

/// A lexical or syntactic error, fatal to the parse that produced it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message} at {location}")]
pub struct SyntaxError {
    /// Human-readable description of what went wrong.
    pub message: String,

    /// Where the erroring construct begins.
    pub location: SourceLocation,
}

impl SyntaxError {
    /// Creates a syntax error at the given location.
    pub fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

/// Caller misuse detected eagerly at construction time.
///
/// Builder entry points reject absent or invalid required fields with
/// this error before any lexing or parsing happens. These failures are
/// independent of source position and are not retryable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A required builder field was not supplied.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A builder field was supplied but violates a construction rule.
    #[error("invalid field {field}: {reason}")]
    InvalidField {
        /// Name of the offending field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },
}

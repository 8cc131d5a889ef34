//! Domain errors. Used by ports, use cases and the command loop.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

/// Raw console text that could not be converted to the requested type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{input} is not a valid {expected}.")]
pub struct ValidationError {
    /// The offending text, verbatim (already trimmed by the input reader).
    pub input: String,
    /// Human-readable name of the expected type, e.g. "decimal number".
    pub expected: &'static str,
}

impl ValidationError {
    pub fn new(input: impl Into<String>, expected: &'static str) -> Self {
        Self {
            input: input.into(),
            expected,
        }
    }
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repo(String),

    #[error("Console error: {0}")]
    Console(String),

    /// Standard input reached end of file; no further selections can be read.
    #[error("Input stream closed")]
    InputClosed,
}

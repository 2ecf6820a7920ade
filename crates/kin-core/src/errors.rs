//! Solver error types.
//!
//! Both variants are recoverable: the orchestrator reports the message,
//! aborts the one calculation, and writes nothing to history.

use thiserror::Error;

/// Errors raised by the solver rules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SolveError {
    /// Wrong count of known quantities, or no formula matches the presence
    /// pattern of the inputs.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Division by a physically-zero denominator, or a square root of a
    /// negative intermediate value.
    #[error("domain error: {0}")]
    Domain(String),
}

impl SolveError {
    pub(crate) fn validation(message: &str) -> Self {
        Self::Validation(message.to_string())
    }

    pub(crate) fn domain(message: &str) -> Self {
        Self::Domain(message.to_string())
    }
}

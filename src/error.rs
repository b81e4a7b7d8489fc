//! Crate error type
//!
//! The engine fails fast: every error is raised synchronously at call time
//! and propagated to the caller. Nothing in here is transient, so there is
//! no retry or recovery logic anywhere in the crate.

use thiserror::Error;

/// Errors produced by the indicator engine.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// A required parameter is absent, a pair of inputs is mutually
    /// exclusive or both missing, or an enumerated option is unrecognized.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Data of the wrong type reached a boundary expecting a specific one,
    /// e.g. a non-float parameter column in a station frame.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// An internal shape assumption was broken (e.g. elementwise operands
    /// with different time axes or grid shapes).
    #[error("assertion violated: {0}")]
    AssertionViolation(String),
}

pub type Result<T> = std::result::Result<T, IndicatorError>;

impl IndicatorError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        IndicatorError::InvalidInput(msg.into())
    }

    pub(crate) fn shape(msg: impl Into<String>) -> Self {
        IndicatorError::AssertionViolation(msg.into())
    }
}

//! Error types for chart primitives.

use thiserror::Error;

/// Errors from pure chart calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum BaseError {
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Invalid numeric input (non-finite or out of domain).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

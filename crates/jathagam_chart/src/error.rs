//! Error types for chart construction.

use chrono::{DateTime, Utc};
use jathagam_base::BaseError;
use thiserror::Error;

/// Failures reported by a [`PositionProvider`](crate::PositionProvider).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("{what} unavailable at {instant}")]
    Unavailable {
        what: &'static str,
        instant: DateTime<Utc>,
    },
    #[error("instant {0} is outside the provider's range")]
    OutOfRange(DateTime<Utc>),
    #[error("provider backend error: {0}")]
    Backend(String),
}

/// Errors from building charts or loading their inputs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartError {
    #[error("position provider: {0}")]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Base(#[from] BaseError),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;

//! Error types for range validation and feed control.

use thiserror::Error;

/// A configured sampling range is unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("range for `{field}` is empty: min {min} must be below max {max}")]
    Empty {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("range for `{field}` has a non-finite bound")]
    NonFinite { field: &'static str },

    #[error("range for `{field}` must have whole, non-negative bounds that fit in u32")]
    NotIntegral { field: &'static str },
}

/// The refresh feed could not be started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("refresh interval must be greater than zero")]
    ZeroInterval,

    #[error("the refresh feed must be started from within a tokio runtime")]
    NoRuntime,
}

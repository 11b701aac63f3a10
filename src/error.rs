//! Error type for the sample's supporting library.

use thiserror::Error;

use crate::arithmetic::Squaring;

/// Errors produced by the arithmetic and logging helpers.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("squaring {num} via {via} overflows i64")]
    Overflow { num: i64, via: Squaring },

    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SampleError>;

//! Warning emission for the value-list sample, plus subscriber setup.

use std::fmt;

use tracing::warn;

use crate::config::LogConfig;
use crate::error::{Result, SampleError};

/// Leading words of every "running test" message.
pub const RUNNING_TEST_PREFIX: &str = "Running test";

/// Render the message logged for one value-list case.
pub fn running_test_message(x: impl fmt::Display) -> String {
    format!("{RUNNING_TEST_PREFIX} {x}")
}

/// Emit exactly one WARN event announcing the case for `x`.
pub fn warn_running(x: impl fmt::Display) {
    warn!("{RUNNING_TEST_PREFIX} {x}");
}

/// Install a global `fmt` subscriber configured from `config`.
///
/// Only the first successful call in a process takes effect.
///
/// # Errors
///
/// Returns [`SampleError::InvalidFilter`] for bad directives and
/// [`SampleError::SubscriberInit`] if a global subscriber is already set.
pub fn init(config: &LogConfig) -> Result<()> {
    let filter = config.env_filter()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .with_ansi(config.ansi)
        .try_init()
        .map_err(|e| SampleError::SubscriberInit(e.to_string()))
}

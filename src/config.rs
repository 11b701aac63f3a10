//! Logging configuration
//!
//! Filter directives come from an environment variable (`RUST_LOG` by default)
//! and fall back to `info` when it is unset.

use std::env;

use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Environment variable consulted for filter directives.
pub const DEFAULT_ENV_VAR: &str = "RUST_LOG";

/// Directives used when the environment variable is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Directives applied when `env_var` is not set
    pub default_filter: String,
    /// Environment variable holding filter directives
    pub env_var: String,
    /// Whether each line carries the event target
    pub with_target: bool,
    /// Whether to emit ANSI colors
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_filter: DEFAULT_FILTER.to_string(),
            env_var: DEFAULT_ENV_VAR.to_string(),
            with_target: true,
            ansi: false,
        }
    }
}

impl LogConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback filter directives
    pub fn with_default_filter(mut self, directives: impl Into<String>) -> Self {
        self.default_filter = directives.into();
        self
    }

    /// Set the environment variable read for directives
    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = name.into();
        self
    }

    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Build the filter from the process environment.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        let from_env = env::var(&self.env_var).ok();
        self.filter_from(from_env.as_deref())
    }

    /// Build the filter from explicit directives, falling back to
    /// `default_filter` when `directives` is `None` or blank.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SampleError::InvalidFilter`] if the directives do not parse.
    pub fn filter_from(&self, directives: Option<&str>) -> Result<EnvFilter> {
        Ok(EnvFilter::try_new(self.resolve_directives(directives))?)
    }

    /// Pick the directives a filter would be built from.
    pub fn resolve_directives<'a>(&'a self, directives: Option<&'a str>) -> &'a str {
        match directives.map(str::trim) {
            Some(d) if !d.is_empty() => d,
            _ => self.default_filter.as_str(),
        }
    }
}

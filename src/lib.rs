#![forbid(unsafe_code)]
//! Example tests written against Rust's test harness
//!
//! The `tests/test_addition.rs` suite shows three conventions: discovery of
//! `test_*` functions, toggle and value-list parametrization (via `rstest`),
//! and a warning-level log call (via `tracing`). This library holds the small
//! pieces those tests exercise: squaring two ways, the "running test" warning,
//! the parameter sets, and logging configuration.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` with `?` / `ok_or` / `map_err`. `unwrap` and `expect` are denied below.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod arithmetic;
pub mod config;
pub mod error;
pub mod logging;
pub mod params;

pub use arithmetic::{Squaring, power_of_two, square};
pub use config::LogConfig;
pub use error::{Result, SampleError};
pub use logging::{running_test_message, warn_running};

//! Squaring, two ways.
//!
//! The power-of-two sample squares [`BASE`] either with the exponentiation
//! operator or by multiplying the number by itself, selected by a boolean
//! toggle. Both paths use checked arithmetic so an overflow surfaces as an
//! error instead of wrapping.

use std::fmt;

use crate::error::{Result, SampleError};

/// Number squared by the power-of-two sample.
pub const BASE: i64 = 2;

/// Value both strategies must produce for [`BASE`].
pub const EXPECTED: i64 = 4;

/// How a number gets squared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Squaring {
    /// `num ** 2`
    PowerOperator,
    /// `num * num`
    Multiplication,
}

impl Squaring {
    /// Map the `with_power_operator` toggle onto a strategy.
    pub fn from_toggle(with_power_operator: bool) -> Self {
        if with_power_operator {
            Squaring::PowerOperator
        } else {
            Squaring::Multiplication
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Squaring::PowerOperator => "power operator",
            Squaring::Multiplication => "multiplication",
        }
    }
}

impl From<bool> for Squaring {
    fn from(with_power_operator: bool) -> Self {
        Self::from_toggle(with_power_operator)
    }
}

impl fmt::Display for Squaring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Square `num` using the given strategy.
///
/// # Errors
///
/// Returns [`SampleError::Overflow`] when the square does not fit in `i64`.
pub fn square(num: i64, via: Squaring) -> Result<i64> {
    let result = match via {
        Squaring::PowerOperator => num.checked_pow(2),
        Squaring::Multiplication => num.checked_mul(num),
    };
    result.ok_or(SampleError::Overflow { num, via })
}

/// Square [`BASE`], choosing the strategy from the toggle.
pub fn power_of_two(with_power_operator: bool) -> Result<i64> {
    square(BASE, Squaring::from(with_power_operator))
}

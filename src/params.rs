//! Parameter sets driving the sample's parametrized tests.
//!
//! These describe *what* each parametrized test runs over; the actual case
//! expansion is done by the test harness (`rstest`). Keeping the sets here
//! lets tests that re-run case bodies by hand iterate the same values in the
//! same order.

use std::fmt;

/// A named boolean parameter, expanded once per value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub name: &'static str,
}

impl Toggle {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Invocation order: `true` first.
    pub const fn values(&self) -> [bool; 2] {
        [true, false]
    }

    pub fn cases(&self) -> impl Iterator<Item = Case<bool>> + '_ {
        self.values().into_iter().map(|value| Case::new(self.name, value))
    }
}

/// A named parameter drawn from a fixed, ordered list of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueList<T: 'static> {
    pub name: &'static str,
    pub values: &'static [T],
}

impl<T: Copy + 'static> ValueList<T> {
    pub const fn new(name: &'static str, values: &'static [T]) -> Self {
        Self { name, values }
    }

    /// Cases in list order.
    pub fn cases(&self) -> impl Iterator<Item = Case<T>> + '_ {
        self.values.iter().map(|&value| Case::new(self.name, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One generated invocation: a parameter name bound to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case<T> {
    pub param: &'static str,
    pub value: T,
}

impl<T> Case<T> {
    pub const fn new(param: &'static str, value: T) -> Self {
        Self { param, value }
    }
}

impl<T: fmt::Display> fmt::Display for Case<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.param, self.value)
    }
}

/// Toggle for `test_power_of_two`.
pub const WITH_POWER_OPERATOR: Toggle = Toggle::new("with_power_operator");

/// Value list for `test_something`.
pub const X: ValueList<i64> = ValueList::new("x", &[1, 2, 3]);

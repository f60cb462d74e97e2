// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # The Calculator Engine
//!
//! A `Calculator` owns a name and a monotonically increasing operation
//! counter. Every arithmetic and statistics operation increments the
//! counter exactly once; `description` and `operation_count` are
//! queries and never do.
//!
//! All operations are total. The documented sentinels are:
//!
//! - `divide` returns `0.0` for a zero divisor.
//! - `average`/`max`/`min` return `0.0` for an empty slice — and the
//!   empty call still counts as an operation.

use abacus_core::num::{WrappingAddVal, WrappingMulVal};
use abacus_core::{arith, stats};

/// Placeholder name used when a calculator is created without one.
pub const DEFAULT_NAME: &str = "Default";

/// A named calculator that counts the operations it performs.
///
/// # Examples
///
/// ```rust
/// # use abacus_engine::calculator::Calculator;
/// let mut calculator = Calculator::new("Test");
/// assert_eq!(calculator.sum(2, 3), 5);
/// assert_eq!(calculator.operation_count(), 1);
/// assert_eq!(
///     calculator.description(),
///     "Calculator 'Test' with 1 operations"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    name: String,
    operation_count: u64,
}

impl Calculator {
    /// Creates a new calculator with the given name and a zeroed
    /// operation counter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operation_count: 0,
        }
    }

    /// Returns the calculator's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of arithmetic and statistics operations
    /// performed so far. Does not count as an operation itself.
    #[inline]
    pub fn operation_count(&self) -> u64 {
        self.operation_count
    }

    /// Adds two values, wrapping on overflow. Counts as one operation.
    pub fn sum<T: WrappingAddVal>(&mut self, a: T, b: T) -> T {
        self.operation_count += 1;
        arith::add(a, b)
    }

    /// Multiplies two values, wrapping on overflow. Counts as one
    /// operation.
    pub fn product<T: WrappingMulVal>(&mut self, a: T, b: T) -> T {
        self.operation_count += 1;
        arith::multiply(a, b)
    }

    /// Divides `a` by `b`, returning `0.0` when `b` is zero. Counts as
    /// one operation.
    pub fn divide(&mut self, a: f64, b: f64) -> f64 {
        self.operation_count += 1;
        arith::divide(a, b)
    }

    /// Returns the arithmetic mean of `values`, or `0.0` for an empty
    /// slice. Counts as one operation either way.
    pub fn average(&mut self, values: &[f64]) -> f64 {
        self.operation_count += 1;
        stats::mean(values).unwrap_or(0.0)
    }

    /// Returns the maximum of `values`, or `0.0` for an empty slice.
    /// Counts as one operation either way.
    pub fn max(&mut self, values: &[f64]) -> f64 {
        self.operation_count += 1;
        stats::max(values).unwrap_or(0.0)
    }

    /// Returns the minimum of `values`, or `0.0` for an empty slice.
    /// Counts as one operation either way.
    pub fn min(&mut self, values: &[f64]) -> f64 {
        self.operation_count += 1;
        stats::min(values).unwrap_or(0.0)
    }

    /// Returns a human-readable description of the calculator. Does
    /// not count as an operation.
    ///
    /// The format is exactly `Calculator '<name>' with <count>
    /// operations`.
    pub fn description(&self) -> String {
        format!(
            "Calculator '{}' with {} operations",
            self.name, self.operation_count
        )
    }
}

impl Default for Calculator {
    /// Creates a calculator named [`DEFAULT_NAME`].
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

impl std::fmt::Display for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_zero_operations() {
        let calculator = Calculator::new("Test");
        assert_eq!(calculator.name(), "Test");
        assert_eq!(calculator.operation_count(), 0);
    }

    #[test]
    fn test_default_uses_placeholder_name() {
        let calculator = Calculator::default();
        assert_eq!(calculator.name(), DEFAULT_NAME);
    }

    #[test]
    fn test_sum_and_product() {
        let mut calculator = Calculator::new("Test");
        assert_eq!(calculator.sum(2, 3), 5);
        assert_eq!(calculator.product(4, 5), 20);
        assert_eq!(calculator.operation_count(), 2);
    }

    #[test]
    fn test_sum_wraps_on_overflow() {
        let mut calculator = Calculator::new("Test");
        assert_eq!(calculator.sum(i32::MAX, 1), i32::MIN);
        assert_eq!(calculator.product(i32::MAX, 2), -2);
    }

    #[test]
    fn test_divide() {
        let mut calculator = Calculator::new("Test");
        assert_eq!(calculator.divide(10.0, 4.0), 2.5);
        assert_eq!(calculator.divide(10.0, 0.0), 0.0);
        assert_eq!(calculator.operation_count(), 2);
    }

    #[test]
    fn test_statistics() {
        let mut calculator = Calculator::new("Test");
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(calculator.average(&values), 2.5);
        assert_eq!(calculator.max(&values), 4.0);
        assert_eq!(calculator.min(&values), 1.0);
        assert_eq!(calculator.operation_count(), 3);
    }

    #[test]
    fn test_empty_statistics_return_zero_and_still_count() {
        let mut calculator = Calculator::new("Test");
        assert_eq!(calculator.average(&[]), 0.0);
        assert_eq!(calculator.max(&[]), 0.0);
        assert_eq!(calculator.min(&[]), 0.0);
        // The engine-side empty guard counts, unlike the boundary
        // short-circuit in the FFI layer.
        assert_eq!(calculator.operation_count(), 3);
    }

    #[test]
    fn test_description_format() {
        let mut calculator = Calculator::new("Test");
        calculator.sum(1, 1);
        calculator.sum(1, 1);
        calculator.sum(1, 1);
        assert_eq!(
            calculator.description(),
            "Calculator 'Test' with 3 operations"
        );
    }

    #[test]
    fn test_queries_do_not_count() {
        let mut calculator = Calculator::new("Test");
        calculator.sum(1, 1);
        let _ = calculator.description();
        let _ = calculator.operation_count();
        assert_eq!(calculator.operation_count(), 1);
    }

    #[test]
    fn test_display_matches_description() {
        let calculator = Calculator::new("Test");
        assert_eq!(format!("{}", calculator), calculator.description());
    }
}

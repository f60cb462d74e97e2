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

//! # Slice Statistics
//!
//! Mean, maximum, and minimum over floating point slices. The empty
//! slice returns `None`; mapping that to a sentinel value is the
//! caller's decision, not this module's.
//!
//! `max` and `min` keep the **first** qualifying element of a single
//! left-to-right scan. An element only replaces the current candidate
//! when it compares strictly greater (or strictly less), so with NaN
//! present the result is whatever that scan naturally produces: NaN
//! elements never replace a candidate, and a leading NaN is never
//! replaced.

use num_traits::Float;

/// Returns the arithmetic mean of `values`, or `None` if the slice is empty.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean::<f64>(&[]), None);
/// ```
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }

    let sum = values.iter().copied().fold(T::zero(), |acc, v| acc + v);
    let len = T::from(values.len()).expect("slice length should be representable as a float");
    Some(sum / len)
}

/// Returns the maximum of `values`, or `None` if the slice is empty.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::stats::max;
/// assert_eq!(max(&[3.0, 1.0, 4.0, 1.0]), Some(4.0));
/// assert_eq!(max::<f64>(&[]), None);
/// ```
pub fn max<T: Float>(values: &[T]) -> Option<T> {
    values
        .iter()
        .copied()
        .reduce(|best, v| if v > best { v } else { best })
}

/// Returns the minimum of `values`, or `None` if the slice is empty.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::stats::min;
/// assert_eq!(min(&[3.0, 1.0, 4.0, 1.0]), Some(1.0));
/// assert_eq!(min::<f64>(&[]), None);
/// ```
pub fn min<T: Float>(values: &[T]) -> Option<T> {
    values
        .iter()
        .copied()
        .reduce(|best, v| if v < best { v } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), Some(4.0));
        assert_eq!(mean(&[5.0]), Some(5.0));
    }

    #[test]
    fn test_mean_negative_values() {
        assert_eq!(mean(&[-1.0, 1.0]), Some(0.0));
    }

    #[test]
    fn test_empty_slice_returns_none() {
        assert_eq!(mean::<f64>(&[]), None);
        assert_eq!(max::<f64>(&[]), None);
        assert_eq!(min::<f64>(&[]), None);
    }

    #[test]
    fn test_max_and_min() {
        let values = [3.5, -2.0, 7.25, 0.0];
        assert_eq!(max(&values), Some(7.25));
        assert_eq!(min(&values), Some(-2.0));
    }

    #[test]
    fn test_single_element() {
        assert_eq!(max(&[1.5]), Some(1.5));
        assert_eq!(min(&[1.5]), Some(1.5));
    }

    #[test]
    fn test_nan_never_replaces_a_candidate() {
        let values = [1.0, f64::NAN, 3.0];
        assert_eq!(max(&values), Some(3.0));
        assert_eq!(min(&values), Some(1.0));
    }

    #[test]
    fn test_leading_nan_is_never_replaced() {
        let values = [f64::NAN, 1.0, 3.0];
        assert!(max(&values).unwrap().is_nan());
        assert!(min(&values).unwrap().is_nan());
    }
}

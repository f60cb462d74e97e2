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

//! # Free Arithmetic Functions
//!
//! Total arithmetic over plain values. Integer operations wrap on
//! overflow (see the `num` module); division substitutes zero for a
//! zero divisor instead of producing an IEEE infinity or trapping.

use crate::num::{WrappingAddVal, WrappingMulVal, WrappingSubVal};
use core::ops::{Div, Sub};
use num_traits::{One, Zero};

/// Adds two values, wrapping on overflow.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::arith::add;
/// assert_eq!(add(2, 3), 5);
/// assert_eq!(add(i32::MAX, 1), i32::MIN);
/// ```
#[inline]
pub fn add<T: WrappingAddVal>(a: T, b: T) -> T {
    a.wrapping_add_val(b)
}

/// Subtracts `b` from `a`, wrapping on underflow.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::arith::subtract;
/// assert_eq!(subtract(5, 3), 2);
/// assert_eq!(subtract(i32::MIN, 1), i32::MAX);
/// ```
#[inline]
pub fn subtract<T: WrappingSubVal>(a: T, b: T) -> T {
    a.wrapping_sub_val(b)
}

/// Multiplies two values, wrapping on overflow.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::arith::multiply;
/// assert_eq!(multiply(6, 7), 42);
/// ```
#[inline]
pub fn multiply<T: WrappingMulVal>(a: T, b: T) -> T {
    a.wrapping_mul_val(b)
}

/// Divides `a` by `b`, returning zero when the divisor is zero.
///
/// The zero-divisor guard applies to floating point as well: dividing
/// by `0.0` yields `0.0`, never an IEEE infinity or NaN. Callers that
/// need to distinguish a genuine zero quotient from a guarded zero
/// divisor must check the divisor themselves.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::arith::divide;
/// assert_eq!(divide(10.0, 4.0), 2.5);
/// assert_eq!(divide(10.0, 0.0), 0.0);
/// assert_eq!(divide(7, 2), 3);
/// assert_eq!(divide(7, 0), 0);
/// ```
#[inline]
pub fn divide<T>(a: T, b: T) -> T
where
    T: Zero + Div<Output = T>,
{
    if b.is_zero() {
        return T::zero();
    }
    a / b
}

/// Computes the factorial of `n` recursively.
///
/// Every `n <= 1` (including all negative inputs) yields one. Products
/// wrap once the result exceeds the range of `T`, so results for large
/// `n` are well-defined but not mathematically meaningful.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::arith::factorial;
/// assert_eq!(factorial(0), 1);
/// assert_eq!(factorial(1), 1);
/// assert_eq!(factorial(5), 120);
/// assert_eq!(factorial(-3), 1);
/// ```
pub fn factorial<T>(n: T) -> T
where
    T: Copy + PartialOrd + One + Sub<Output = T> + WrappingMulVal,
{
    if n <= T::one() {
        return T::one();
    }
    n.wrapping_mul_val(factorial(n - T::one()))
}

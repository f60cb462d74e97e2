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

//! # Free-Function Math Surface
//!
//! Handle-free value operations: scalar arithmetic, geometry helpers,
//! factorial, and the [`FfiPoint`] value type. Everything here is a
//! pure function over plain values — no handles, no allocation, no
//! ownership concerns.

use abacus_core::arith;
use abacus_core::geometry::{self, Point};

/// A C-compatible 2D point, passed and returned by value.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FfiPoint {
    pub x: f64,
    pub y: f64,
}

impl FfiPoint {
    /// Creates a new `FfiPoint`.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for FfiPoint {
    fn from(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

impl From<FfiPoint> for Point {
    fn from(point: FfiPoint) -> Self {
        Point::new(point.x, point.y)
    }
}

impl std::fmt::Display for FfiPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Adds two integers, wrapping on overflow.
#[no_mangle]
pub extern "C" fn abacus_add(a: i32, b: i32) -> i32 {
    arith::add(a, b)
}

/// Subtracts `b` from `a`, wrapping on underflow.
#[no_mangle]
pub extern "C" fn abacus_subtract(a: i32, b: i32) -> i32 {
    arith::subtract(a, b)
}

/// Multiplies two integers, wrapping on overflow.
#[no_mangle]
pub extern "C" fn abacus_multiply(a: i32, b: i32) -> i32 {
    arith::multiply(a, b)
}

/// Divides `a` by `b`. Dividing by `0.0` returns `0.0`, never an IEEE
/// infinity.
#[no_mangle]
pub extern "C" fn abacus_divide(a: f64, b: f64) -> f64 {
    arith::divide(a, b)
}

/// Returns the hypotenuse of a right triangle with legs `a` and `b`.
#[no_mangle]
pub extern "C" fn abacus_hypotenuse(a: f64, b: f64) -> f64 {
    geometry::hypotenuse(a, b)
}

/// Returns the area of a circle with the given radius.
#[no_mangle]
pub extern "C" fn abacus_circle_area(radius: f64) -> f64 {
    geometry::circle_area(radius)
}

/// Returns `n` factorial. Every `n <= 0` yields `1`; results wrap once
/// they exceed the `i32` range.
#[no_mangle]
pub extern "C" fn abacus_factorial(n: i32) -> i32 {
    arith::factorial(n)
}

/// Returns the component-wise sum of two points.
#[no_mangle]
pub extern "C" fn abacus_add_points(a: FfiPoint, b: FfiPoint) -> FfiPoint {
    Point::from(a).add(Point::from(b)).into()
}

/// Returns `point` scaled by `factor` in both components.
#[no_mangle]
pub extern "C" fn abacus_scale_point(point: FfiPoint, factor: f64) -> FfiPoint {
    Point::from(point).scale(factor).into()
}

/// Returns the Euclidean distance between two points.
#[no_mangle]
pub extern "C" fn abacus_point_distance(a: FfiPoint, b: FfiPoint) -> f64 {
    Point::from(a).distance(Point::from(b))
}

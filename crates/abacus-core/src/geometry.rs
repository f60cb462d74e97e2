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

//! # 2D Geometry Primitives
//!
//! A plain 2D point value type and a pair of scalar helpers. Points
//! are passed and returned by value; there are no ownership semantics
//! anywhere in this module.

/// π truncated to 11 decimal places. [`circle_area`] is pinned to this
/// constant; results differ from `std::f64::consts::PI` in the last
/// digits.
const CIRCLE_PI: f64 = 3.14159265359;

/// A 2D coordinate with `f64` components.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::geometry::Point;
/// let p = Point::new(1.0, 2.0);
/// let q = Point::new(3.0, 4.0);
/// assert_eq!(p.add(q), Point::new(4.0, 6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new `Point` from its components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the component-wise sum of two points.
    #[inline]
    pub fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Returns the point scaled by `factor` in both components.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use abacus_core::geometry::Point;
    /// assert_eq!(Point::new(2.0, 3.0).scale(2.0), Point::new(4.0, 6.0));
    /// ```
    #[inline]
    pub fn scale(self, factor: f64) -> Point {
        Point {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the Euclidean distance between two points.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use abacus_core::geometry::Point;
    /// let origin = Point::new(0.0, 0.0);
    /// assert_eq!(origin.distance(Point::new(3.0, 4.0)), 5.0);
    /// ```
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Point::add(self, rhs)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Returns the hypotenuse of a right triangle with legs `a` and `b`.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::geometry::hypotenuse;
/// assert_eq!(hypotenuse(3.0, 4.0), 5.0);
/// ```
#[inline]
pub fn hypotenuse(a: f64, b: f64) -> f64 {
    (a * a + b * b).sqrt()
}

/// Returns the area of a circle with the given radius.
///
/// Uses the truncated π constant of this module.
#[inline]
pub fn circle_area(radius: f64) -> f64 {
    CIRCLE_PI * radius * radius
}

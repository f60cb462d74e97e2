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

//! # Abacus Core
//!
//! Foundational numerics and pure math primitives for the Abacus
//! calculator library. This crate consolidates the value-level building
//! blocks that the stateful engine and the C ABI layer are built on.
//!
//! ## Modules
//!
//! - `num`: By-value wrapping arithmetic traits (`WrappingAddVal`,
//!   `WrappingSubVal`, `WrappingMulVal`) implemented for all primitive
//!   integer types. Overflow wraps in every build profile, matching the
//!   two's-complement behavior C callers observe.
//! - `arith`: Free arithmetic functions (`add`, `subtract`, `multiply`,
//!   `divide`, `factorial`). Division substitutes zero for a zero
//!   divisor instead of producing IEEE infinities or trapping.
//! - `stats`: Slice statistics (`mean`, `max`, `min`) over floating
//!   point values, returning `None` for empty input.
//! - `geometry`: A plain 2D `Point` value type with addition, scaling,
//!   and distance, plus `hypotenuse` and `circle_area` helpers.
//!
//! ## Purpose
//!
//! Everything in this crate is a total function over plain values: no
//! handles, no allocation beyond what the caller provides, no error
//! signaling. Edge cases (zero divisors, empty slices) resolve to
//! documented sentinel or `Option` results so higher layers can expose
//! a flat, infallible surface.

pub mod arith;
pub mod geometry;
pub mod num;
pub mod stats;

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

//! # Abacus FFI
//!
//! **C-Compatible Bindings for the Abacus Calculator Library.**
//!
//! This crate is the bridge between the Rust engine and foreign hosts
//! such as Dart/Flutter, C, C++, or JVM applications. It exposes a
//! flat, ABI-stable function set designed around **validated opaque
//! handles** and explicit **resource management**.
//!
//! ## Core Design Principles
//!
//! 1.  **Validated Handles**: Calculators live in an internal
//!     generational slot table and are referenced by packed `u64`
//!     handles, never by raw addresses. A zero, stale, or double-freed
//!     handle fails validation: operations on it return sentinel
//!     values and destruction is a no-op, instead of undefined
//!     behavior.
//! 2.  **Explicit Lifecycle**: Memory is manually managed from the
//!     host's perspective. Every `abacus_calculator_new` call should
//!     have a matching `abacus_calculator_free`, and every non-null
//!     string returned by `abacus_calculator_description` must be
//!     released with `abacus_string_free` exactly once. Failing to do
//!     so leaks memory.
//! 3.  **Sentinel Returns**: The surface signals nothing except string
//!     allocation failure (a `NULL` return). Zero divides, empty or
//!     invalid arrays, and unresolvable handles all produce a
//!     documented sentinel value (`0`, `0.0`, or `NULL`).
//!
//! ## Modules
//!
//! - `calculator`: handle lifecycle and the stateful calculator
//!   surface (`abacus_calculator_*`, `abacus_string_free`).
//! - `math`: handle-free value operations (`abacus_add`,
//!   `abacus_factorial`, point geometry, ...).

pub mod calculator;
pub mod math;

mod registry;

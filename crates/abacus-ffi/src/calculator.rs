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

//! # Foreign Function Interface (FFI) for the Calculator Engine
//!
//! This module exposes the stateful [`Calculator`] engine through a
//! flat, ABI-stable function set operating on validated handles and
//! primitive/array types only. No managed object graph ever crosses
//! the boundary.
//!
//! ## Usage Lifecycle
//!
//! 1. **Instantiation**: Create a calculator with
//!    [`abacus_calculator_new`] (a `NULL` name selects the default).
//! 2. **Operations**: Pass the handle plus primitive or
//!    pointer+length arguments to the `abacus_calculator_*`
//!    operation functions.
//! 3. **Description**: [`abacus_calculator_description`] returns an
//!    owned, NUL-terminated string; release it with
//!    [`abacus_string_free`] exactly once.
//! 4. **Cleanup**: Destroy the instance with
//!    [`abacus_calculator_free`].
//!
//! ## Handle Validation
//!
//! Handles are generational registry handles, not raw addresses (see
//! `registry`). A zero, stale, or double-freed handle never resolves:
//! operations on it return their sentinel value (`0`, `0.0`, or
//! `NULL`) and destruction is a no-op. This is deliberately stricter
//! than a raw-pointer ABI, where the same mistakes would be undefined
//! behavior.
//!
//! ## Array Arguments
//!
//! Statistics functions take a borrowed pointer + length. A `NULL`
//! pointer or a non-positive length short-circuits to `0.0` at the
//! boundary **without** reaching the engine, so the instance's
//! operation counter is not incremented. The borrowed view is only
//! read for the duration of the call; the library never retains it.
//!
//! ## Threading
//!
//! The registry lock protects table integrity only. Operating on the
//! same handle from multiple threads concurrently is outside the
//! supported contract; callers must serialize access per handle.

use crate::registry::{RawHandle, Registry};
use abacus_engine::calculator::Calculator;
use libc::c_char;
use std::ffi::{CStr, CString};
use std::sync::{Mutex, MutexGuard};

/// An opaque, validated handle to a live [`Calculator`]. `0` is never
/// issued and never resolves.
pub type CalculatorHandle = RawHandle;

/// The table owning every calculator instance exposed over the ABI.
static CALCULATORS: Mutex<Registry<Calculator>> = Mutex::new(Registry::new());

/// Locks the calculator table. A poisoned lock only means another
/// caller panicked while holding it; the table itself is still
/// consistent, so the guard is recovered.
fn calculators() -> MutexGuard<'static, Registry<Calculator>> {
    match CALCULATORS.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Creates a new calculator and returns its handle.
///
/// A `NULL` name selects the default name. A non-UTF-8 name is
/// converted lossily. This function never fails and never returns `0`.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// If `name` is non-null, it must point to a valid NUL-terminated
/// C string that outlives the call.
#[no_mangle]
pub unsafe extern "C" fn abacus_calculator_new(name: *const c_char) -> CalculatorHandle {
    let calculator = if name.is_null() {
        Calculator::default()
    } else {
        Calculator::new(CStr::from_ptr(name).to_string_lossy().into_owned())
    };

    calculators().insert(calculator)
}

/// Destroys the calculator behind `handle` and releases its resources.
///
/// A zero handle, a stale handle, or a handle that was already freed
/// is rejected by the registry and the call is a no-op, so double
/// destruction cannot corrupt the table.
#[no_mangle]
pub extern "C" fn abacus_calculator_free(handle: CalculatorHandle) {
    drop(calculators().remove(handle));
}

/// Adds two integers on the given calculator, wrapping on overflow.
///
/// Counts as one operation. Returns `0` without counting if the handle
/// does not resolve.
#[no_mangle]
pub extern "C" fn abacus_calculator_sum(handle: CalculatorHandle, a: i32, b: i32) -> i32 {
    calculators()
        .get_mut(handle)
        .map_or(0, |calculator| calculator.sum(a, b))
}

/// Multiplies two integers on the given calculator, wrapping on
/// overflow.
///
/// Counts as one operation. Returns `0` without counting if the handle
/// does not resolve.
#[no_mangle]
pub extern "C" fn abacus_calculator_product(handle: CalculatorHandle, a: i32, b: i32) -> i32 {
    calculators()
        .get_mut(handle)
        .map_or(0, |calculator| calculator.product(a, b))
}

/// Divides `a` by `b` on the given calculator. Dividing by `0.0`
/// returns `0.0`, never an IEEE infinity.
///
/// Counts as one operation. Returns `0.0` without counting if the
/// handle does not resolve.
#[no_mangle]
pub extern "C" fn abacus_calculator_divide(handle: CalculatorHandle, a: f64, b: f64) -> f64 {
    calculators()
        .get_mut(handle)
        .map_or(0.0, |calculator| calculator.divide(a, b))
}

/// Returns the arithmetic mean of a borrowed `f64` array.
///
/// A `NULL` pointer or a non-positive length returns `0.0` without
/// reaching the engine; the operation counter is not incremented in
/// that case. Returns `0.0` without counting if the handle does not
/// resolve.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// If `values` is non-null and `length` is positive, `values` must
/// point to at least `length` readable `f64` values that stay valid
/// for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn abacus_calculator_average(
    handle: CalculatorHandle,
    values: *const f64,
    length: i32,
) -> f64 {
    if values.is_null() || length <= 0 {
        return 0.0;
    }

    let values = std::slice::from_raw_parts(values, length as usize);
    calculators()
        .get_mut(handle)
        .map_or(0.0, |calculator| calculator.average(values))
}

/// Returns the maximum of a borrowed `f64` array.
///
/// Guards and counting behave exactly like
/// [`abacus_calculator_average`].
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// If `values` is non-null and `length` is positive, `values` must
/// point to at least `length` readable `f64` values that stay valid
/// for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn abacus_calculator_max(
    handle: CalculatorHandle,
    values: *const f64,
    length: i32,
) -> f64 {
    if values.is_null() || length <= 0 {
        return 0.0;
    }

    let values = std::slice::from_raw_parts(values, length as usize);
    calculators()
        .get_mut(handle)
        .map_or(0.0, |calculator| calculator.max(values))
}

/// Returns the minimum of a borrowed `f64` array.
///
/// Guards and counting behave exactly like
/// [`abacus_calculator_average`].
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// If `values` is non-null and `length` is positive, `values` must
/// point to at least `length` readable `f64` values that stay valid
/// for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn abacus_calculator_min(
    handle: CalculatorHandle,
    values: *const f64,
    length: i32,
) -> f64 {
    if values.is_null() || length <= 0 {
        return 0.0;
    }

    let values = std::slice::from_raw_parts(values, length as usize);
    calculators()
        .get_mut(handle)
        .map_or(0.0, |calculator| calculator.min(values))
}

/// Returns the calculator's description as a newly allocated,
/// NUL-terminated C string. Does not count as an operation.
///
/// Ownership of the returned buffer transfers to the caller, who must
/// release it with [`abacus_string_free`] exactly once. Returns `NULL`
/// if the handle does not resolve or if the C string cannot be
/// allocated; a `NULL` return requires no release.
#[no_mangle]
pub extern "C" fn abacus_calculator_description(handle: CalculatorHandle) -> *mut c_char {
    let description = match calculators().get(handle) {
        Some(calculator) => calculator.description(),
        None => return std::ptr::null_mut(),
    };

    match CString::new(description) {
        Ok(text) => text.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Releases a string previously returned by
/// [`abacus_calculator_description`]. A `NULL` pointer is a no-op.
///
/// # Safety
///
/// This function is unsafe because it reclaims a raw allocation.
/// `ptr` must be `NULL` or a pointer obtained from
/// [`abacus_calculator_description`] that has not been released
/// before. Releasing any other pointer, or releasing the same pointer
/// twice, is undefined behavior.
#[no_mangle]
pub unsafe extern "C" fn abacus_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Returns the number of operations performed on the given calculator.
/// Does not count as an operation itself.
///
/// Returns `0` if the handle does not resolve.
#[no_mangle]
pub extern "C" fn abacus_calculator_operation_count(handle: CalculatorHandle) -> i32 {
    calculators()
        .get(handle)
        .map_or(0, |calculator| calculator.operation_count() as i32)
}

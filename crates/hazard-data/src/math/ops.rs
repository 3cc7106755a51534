//! Element-wise arithmetic and scans over flat numeric arrays.
//!
//! Sequences and interval containers store their values in contiguous
//! slices (row-major for tables and volumes). These helpers operate on those
//! slices directly. Functions prefixed `checked_` validate operand lengths;
//! the rest assume the caller has already done so.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{sync::Arc, vec::Vec};
#[cfg(feature = "std")]
use std::{sync::Arc, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DataError;
use crate::primitives::validator::Validator;

// ============================================================================
// Structural Comparison
// ============================================================================

/// Check whether two key arrays are identical.
///
/// Compares storage identity first and falls back to element-wise equality,
/// so arrays shared between a model and its derivatives compare in O(1).
#[inline]
pub fn same_keys<T: Float>(a: &Arc<[T]>, b: &Arc<[T]>) -> bool {
    Arc::ptr_eq(a, b) || a[..] == b[..]
}

// ============================================================================
// Arithmetic
// ============================================================================

/// Add `term` to every value.
#[inline]
pub fn add_scalar<T: Float>(term: T, data: &mut [T]) {
    for v in data.iter_mut() {
        *v = *v + term;
    }
}

/// Multiply every value by `scale`.
#[inline]
pub fn scale<T: Float>(scale: T, data: &mut [T]) {
    for v in data.iter_mut() {
        *v = *v * scale;
    }
}

/// Add `src` into `dest` element-wise; lengths must already agree.
#[inline]
pub fn add_assign<T: Float>(dest: &mut [T], src: &[T]) {
    debug_assert_eq!(dest.len(), src.len());
    for (d, &s) in dest.iter_mut().zip(src) {
        *d = *d + s;
    }
}

/// Add `src` into `dest` element-wise after checking lengths.
pub fn checked_add_assign<T: Float>(dest: &mut [T], src: &[T]) -> Result<(), DataError> {
    Validator::validate_lengths(dest.len(), src.len())?;
    add_assign(dest, src);
    Ok(())
}

/// Multiply `dest` by `src` element-wise; lengths must already agree.
#[inline]
pub fn mul_assign<T: Float>(dest: &mut [T], src: &[T]) {
    debug_assert_eq!(dest.len(), src.len());
    for (d, &s) in dest.iter_mut().zip(src) {
        *d = *d * s;
    }
}

/// Replace every value `v` with `1 - v`.
#[inline]
pub fn complement<T: Float>(data: &mut [T]) {
    for v in data.iter_mut() {
        *v = T::one() - *v;
    }
}

/// Sum all values.
#[inline]
pub fn sum<T: Float>(data: &[T]) -> T {
    data.iter().fold(T::zero(), |acc, &v| acc + v)
}

/// Sum each consecutive block of `width` values.
///
/// Collapses the innermost dimension of a row-major array: a table of
/// `r x c` values becomes `r` row sums, a volume of `r x c x l` values
/// becomes `r x c` column sums.
pub fn collapse<T: Float>(data: &[T], width: usize) -> Vec<T> {
    debug_assert!(width > 0 && data.len() % width == 0);
    data.chunks_exact(width).map(sum).collect()
}

// ============================================================================
// Scans
// ============================================================================

/// Check whether every value is exactly zero.
#[inline]
pub fn is_zero_valued<T: Float>(data: &[T]) -> bool {
    data.iter().all(|&v| v == T::zero())
}

/// Position of the first non-zero value.
#[inline]
pub fn first_non_zero<T: Float>(data: &[T]) -> Option<usize> {
    data.iter().position(|&v| v != T::zero())
}

/// Position of the last non-zero value.
#[inline]
pub fn last_non_zero<T: Float>(data: &[T]) -> Option<usize> {
    data.iter().rposition(|&v| v != T::zero())
}

/// Position of the smallest value; ties resolve to the first occurrence.
pub fn min_index<T: Float>(data: &[T]) -> usize {
    let mut best = 0;
    for (i, &v) in data.iter().enumerate().skip(1) {
        if v < data[best] {
            best = i;
        }
    }
    best
}

/// Position of the largest value; ties resolve to the first occurrence.
pub fn max_index<T: Float>(data: &[T]) -> usize {
    let mut best = 0;
    for (i, &v) in data.iter().enumerate().skip(1) {
        if v > data[best] {
            best = i;
        }
    }
    best
}

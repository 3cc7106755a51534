//! Bin-center key generation and value-to-bin indexing.
//!
//! ## Purpose
//!
//! This module provides the pure functions every interval container relies
//! on: generating the bin-center keys of a dimension and resolving a value
//! to the bin that contains it.
//!
//! ## Design notes
//!
//! * **Edges vs. centers**: Containers are defined by bin edges (`min`, `max`)
//!   and a width, but expose bin centers as keys. Lookups always use edges,
//!   which avoids comparing against rounded keys.
//! * **Fixed precision**: Keys are rounded to [`KEY_PRECISION`] decimal places
//!   so that drift does not accumulate across many bins.
//! * **Flooring**: [`index_of`] floors toward negative infinity, so a value
//!   lying exactly on an interior edge belongs to the higher bin.
//!
//! ## Invariants
//!
//! * Generated keys are strictly increasing and non-empty. Widths too fine
//!   for [`KEY_PRECISION`] are rejected rather than producing duplicates.
//! * For every key `k` at position `i`, `index_of(min, delta, k, n) == i`.
//!
//! ## Non-goals
//!
//! * This module does not support high precision keys (more than 4 decimal places).
//! * This module does not support non-uniform bin widths.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::trace;

// Internal dependencies
use crate::primitives::errors::DataError;
use crate::primitives::validator::{to_f64, Validator, SEQUENCE_EPSILON};

// ============================================================================
// Constants
// ============================================================================

/// Number of decimal places retained by generated keys.
pub const KEY_PRECISION: i32 = 4;

// ============================================================================
// Key Generation
// ============================================================================

/// Create the bin-center keys for a dimension.
///
/// `min` is the lower edge of the lowermost bin, `max` the upper edge of the
/// uppermost bin and `delta` the bin width. If `max - min` is not evenly
/// divisible by `delta`, the final partial bin is dropped.
///
/// # Example
///
/// ```rust
/// use hazard_data::prelude::*;
///
/// let k = keys(5.0, 8.0, 1.0)?;
/// assert_eq!(k, vec![5.5, 6.5, 7.5]);
/// # Result::<(), DataError>::Ok(())
/// ```
pub fn keys<T: Float>(min: T, max: T, delta: T) -> Result<Vec<T>, DataError> {
    Validator::validate_bins(min, max, delta)?;
    let half = delta / (T::one() + T::one());
    let keys = clean_sequence(min + half, max - half, delta, KEY_PRECISION);
    // Widths finer than the key precision round neighbouring centers together
    if keys.is_empty() || Validator::validate_increasing(&keys).is_err() {
        return Err(DataError::InvalidDelta(to_f64(delta)));
    }
    trace!(
        min = to_f64(min),
        max = to_f64(max),
        delta = to_f64(delta),
        count = keys.len(),
        "generated bin keys"
    );
    Ok(keys)
}

/// Build an ascending sequence from `start` to at most `end` in increments of
/// `step`, with every value rounded to `precision` decimal places.
///
/// Returns an empty vector if `step` is not positive or `end` lies below
/// `start` by more than floating-point error.
pub fn clean_sequence<T: Float>(start: T, end: T, step: T, precision: i32) -> Vec<T> {
    if !(step > T::zero()) {
        return Vec::new();
    }
    let eps = T::from(SEQUENCE_EPSILON).unwrap_or_else(T::epsilon);
    let count = ((end - start) / step + eps)
        .floor()
        .to_usize()
        .map_or(0, |steps| steps + 1);

    let mut seq = Vec::with_capacity(count);
    let mut offset = T::zero();
    for _ in 0..count {
        seq.push(round_to(start + offset * step, precision));
        offset = offset + T::one();
    }
    seq
}

/// Round `value` half away from zero to `precision` decimal places.
#[inline]
pub fn round_to<T: Float>(value: T, precision: i32) -> T {
    let ten = T::from(10.0).unwrap_or_else(T::one);
    let scale = ten.powi(precision);
    (value * scale).round() / scale
}

// ============================================================================
// Indexing
// ============================================================================

/// Compute the index of the bin containing `value`.
///
/// The index is `floor((value - min) / delta)` and must lie in `[0, size)`.
/// Values on an interior bin edge resolve to the higher bin; a value equal to
/// the uppermost edge is therefore out of range.
pub fn index_of<T: Float>(min: T, delta: T, value: T, size: usize) -> Result<usize, DataError> {
    ((value - min) / delta)
        .floor()
        .to_usize()
        .filter(|&i| i < size)
        .ok_or(DataError::ValueOutOfRange {
            value: to_f64(value),
            size,
        })
}

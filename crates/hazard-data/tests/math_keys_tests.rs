#![cfg(feature = "dev")]
//! Tests for bin-center key generation and value-to-bin indexing.
//!
//! These tests verify the key utilities every interval container relies on:
//! - Bin-center generation and rounding
//! - Dropping of partial trailing bins
//! - Flooring of values onto bin indices, including edge values
//!
//! ## Test Organization
//!
//! 1. **Key Generation** - Centers, precision, partial bins
//! 2. **Key Validation** - Invalid edges and widths
//! 3. **Indexing** - Interior values, edges, out-of-range values
//! 4. **Helpers** - `clean_sequence` and `round_to`

use approx::assert_relative_eq;

use hazard_data::internals::math::keys::{clean_sequence, round_to};
use hazard_data::prelude::*;

// ============================================================================
// Key Generation Tests
// ============================================================================

/// Test the canonical magnitude bins.
///
/// Verifies that keys are the centers of unit bins between 5 and 8.
#[test]
fn test_keys_basic() {
    let k = keys(5.0, 8.0, 1.0).unwrap();
    assert_eq!(k, vec![5.5, 6.5, 7.5]);
}

/// Test that a trailing partial bin is dropped.
///
/// Verifies that `max - min` not divisible by `delta` truncates.
#[test]
fn test_keys_partial_bin_dropped() {
    let k = keys(0.0, 2.5, 1.0).unwrap();
    assert_eq!(k, vec![0.5, 1.5]);
}

/// Test a single bin spanning the whole range.
#[test]
fn test_keys_single_bin() {
    let k = keys(0.0, 1.0, 1.0).unwrap();
    assert_eq!(k, vec![0.5]);
}

/// Test a single bin whose range rounds just below its width.
///
/// Verifies that `0.3 - 0.1` falling short of `0.2` by one ulp still yields
/// the bin `[0.1, 0.3)`.
#[test]
fn test_keys_single_bin_with_drift() {
    let k = keys(0.1, 0.3, 0.2).unwrap();
    assert_eq!(k, vec![0.2]);
    assert_eq!(index_of(0.1, 0.2, 0.25, k.len()).unwrap(), 0);
}

/// Test fractional widths with accumulated floating-point error.
///
/// Verifies that keys are rounded to four decimal places and that the final
/// bin is not lost to drift.
#[test]
fn test_keys_fractional_width() {
    let k = keys(0.0, 1.0, 0.1).unwrap();
    assert_eq!(k.len(), 10);
    assert_eq!(k[0], 0.05);
    assert_eq!(k[3], 0.35);
    assert_eq!(k[9], 0.95);
    for w in k.windows(2) {
        assert!(w[1] > w[0], "keys must increase strictly");
    }
}

/// Test that keys are rounded to the fixed precision.
#[test]
fn test_keys_precision() {
    let k = keys(0.0, 1.0, 1.0 / 3.0).unwrap();
    assert_eq!(k, vec![0.1667, 0.5, 0.8333]);
    assert_eq!(KEY_PRECISION, 4);
}

/// Test key generation in single precision.
#[test]
fn test_keys_f32() {
    let k = keys(5.0f32, 8.0, 1.0).unwrap();
    assert_eq!(k, vec![5.5f32, 6.5, 7.5]);
}

/// Test negative edges, as used for epsilon bins.
#[test]
fn test_keys_negative_range() {
    let k = keys(-3.0, 3.0, 2.0).unwrap();
    assert_eq!(k, vec![-2.0, 0.0, 2.0]);
}

// ============================================================================
// Key Validation Tests
// ============================================================================

/// Test that a non-positive width is rejected.
#[test]
fn test_keys_invalid_delta() {
    assert!(matches!(
        keys(0.0, 1.0, 0.0),
        Err(DataError::InvalidDelta(_))
    ));
    assert!(matches!(
        keys(0.0, 1.0, -1.0),
        Err(DataError::InvalidDelta(_))
    ));
}

/// Test that a width wider than the range is rejected.
#[test]
fn test_keys_delta_exceeds_range() {
    assert!(matches!(
        keys(0.0, 1.0, 2.0),
        Err(DataError::InvalidDelta(_))
    ));
}

/// Test that widths finer than the key precision are rejected.
///
/// Verifies that rounding never yields repeated keys.
#[test]
fn test_keys_width_below_precision() {
    assert!(matches!(
        keys(0.0, 0.0004, 0.00005),
        Err(DataError::InvalidDelta(_))
    ));
    let k = keys(0.0, 0.004, 0.001).unwrap();
    assert_eq!(k, vec![0.0005, 0.0015, 0.0025, 0.0035]);
}

/// Test that an empty or inverted range is rejected.
#[test]
fn test_keys_invalid_range() {
    assert!(matches!(
        keys(1.0, 1.0, 0.5),
        Err(DataError::InvalidRange { .. })
    ));
    assert!(matches!(
        keys(2.0, 1.0, 0.5),
        Err(DataError::InvalidRange { .. })
    ));
}

/// Test that non-finite edges are rejected.
#[test]
fn test_keys_non_finite() {
    assert!(matches!(
        keys(f64::NAN, 1.0, 0.5),
        Err(DataError::NonFiniteValue(_))
    ));
    assert!(matches!(
        keys(0.0, f64::INFINITY, 0.5),
        Err(DataError::NonFiniteValue(_))
    ));
}

/// Test that all key errors classify as argument errors.
#[test]
fn test_keys_error_kind() {
    let err = keys(0.0, 1.0, 0.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
}

// ============================================================================
// Indexing Tests
// ============================================================================

/// Test values inside bins.
#[test]
fn test_index_of_interior() {
    assert_eq!(index_of(5.0, 1.0, 5.2, 3).unwrap(), 0);
    assert_eq!(index_of(5.0, 1.0, 6.7, 3).unwrap(), 1);
    assert_eq!(index_of(5.0, 1.0, 7.99, 3).unwrap(), 2);
}

/// Test that interior edges resolve to the higher bin.
#[test]
fn test_index_of_edges() {
    assert_eq!(index_of(5.0, 1.0, 5.0, 3).unwrap(), 0);
    assert_eq!(index_of(5.0, 1.0, 6.0, 3).unwrap(), 1);
    assert_eq!(index_of(5.0, 1.0, 7.0, 3).unwrap(), 2);
}

/// Test that the uppermost edge is out of range.
#[test]
fn test_index_of_upper_edge() {
    assert!(matches!(
        index_of(5.0, 1.0, 8.0, 3),
        Err(DataError::ValueOutOfRange { size: 3, .. })
    ));
}

/// Test that values below the lowest edge are out of range.
///
/// Verifies flooring toward negative infinity: a value just below `min`
/// maps to index -1 rather than truncating to 0.
#[test]
fn test_index_of_below_min() {
    assert!(matches!(
        index_of(5.0, 1.0, 4.5, 3),
        Err(DataError::ValueOutOfRange { .. })
    ));
    assert!(matches!(
        index_of(5.0, 1.0, 4.9999, 3),
        Err(DataError::ValueOutOfRange { .. })
    ));
}

/// Test that NaN never maps to a bin.
#[test]
fn test_index_of_nan() {
    let err = index_of(0.0, 1.0, f64::NAN, 3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Index);
}

/// Test that every generated key maps back to its own bin.
#[test]
fn test_index_of_keys_round_trip() {
    let (min, max, delta) = (4.7, 8.0, 0.1);
    let k = keys(min, max, delta).unwrap();
    for (i, &key) in k.iter().enumerate() {
        assert_eq!(index_of(min, delta, key, k.len()).unwrap(), i);
    }
}

/// Test that any value inside a bin maps to that bin.
///
/// Verifies the lower edge and a value just below the upper edge of every
/// bin, using widths that are exact in binary.
#[test]
fn test_index_of_values_within_bins() {
    let (min, max, delta) = (-2.0, 6.0, 0.5);
    let n = keys(min, max, delta).unwrap().len();
    assert_eq!(n, 16);
    for i in 0..n {
        let lower = min + i as f64 * delta;
        let upper = min + (i + 1) as f64 * delta;
        assert_eq!(index_of(min, delta, lower, n).unwrap(), i);
        assert_eq!(index_of(min, delta, lower + 0.25 * delta, n).unwrap(), i);
        assert_eq!(index_of(min, delta, upper - 1e-9, n).unwrap(), i);
    }
}

// ============================================================================
// Helper Tests
// ============================================================================

/// Test that clean sequences include an end value reached with drift.
#[test]
fn test_clean_sequence_inclusive_end() {
    let s = clean_sequence(0.0, 0.3, 0.1, 4);
    assert_eq!(s, vec![0.0, 0.1, 0.2, 0.3]);
}

/// Test that an inverted or degenerate sequence is empty.
#[test]
fn test_clean_sequence_empty() {
    assert!(clean_sequence(1.0, 0.0, 0.1, 4).is_empty());
    assert!(clean_sequence(0.0, 1.0, 0.0, 4).is_empty());
}

/// Test that an end value below the start only by drift is still included.
#[test]
fn test_clean_sequence_single_with_drift() {
    let end = 0.3 - 0.1;
    assert!(end < 0.2);
    assert_eq!(clean_sequence(0.2, end, 0.2, 4), vec![0.2]);
}

/// Test rounding to a fixed number of decimal places.
#[test]
fn test_round_to() {
    assert_relative_eq!(round_to(1.23456, 4), 1.2346, epsilon = 1e-12);
    assert_relative_eq!(round_to(-1.23456, 2), -1.23, epsilon = 1e-12);
    assert_relative_eq!(round_to(2.5, 0), 3.0, epsilon = 1e-12);
}

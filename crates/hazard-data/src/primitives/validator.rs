//! Input validation for sequences and interval dimensions.
//!
//! ## Purpose
//!
//! This module provides the boundary checks run by every public constructor
//! and accessor: sequence arrays, bin definitions, indices and bulk writes.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * A validated sequence is non-empty, has equal lengths and strictly increasing x-values.
//! * A validated bin definition yields at least one bin.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not generate keys or compute indices.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DataError;

/// Slack added when counting sequence steps so that an end value reached
/// only up to floating-point error is still included.
pub(crate) const SEQUENCE_EPSILON: f64 = 1e-9;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sequence arrays and interval dimensions.
///
/// All methods return `Result<(), DataError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Sequence Validation
    // ========================================================================

    /// Validate backing arrays for an xy-sequence.
    pub fn validate_sequence<T: Float>(xs: &[T], ys: &[T]) -> Result<(), DataError> {
        // Check 1: Non-empty
        if xs.is_empty() {
            return Err(DataError::EmptyInput);
        }

        // Check 2: Matching lengths
        Self::validate_lengths(xs.len(), ys.len())?;

        // Check 3: Strictly increasing (NaN never compares greater)
        Self::validate_increasing(xs)?;

        // Check 4: A lone x-value has no neighbour to compare against
        if xs[0].is_nan() {
            return Err(DataError::NonFiniteValue(f64::NAN));
        }
        Ok(())
    }

    /// Validate that x-values increase strictly.
    pub fn validate_increasing<T: Float>(xs: &[T]) -> Result<(), DataError> {
        for (i, w) in xs.windows(2).enumerate() {
            if !(w[1] > w[0]) {
                return Err(DataError::NotIncreasing { index: i + 1 });
            }
        }
        Ok(())
    }

    /// Validate that two arrays have the same length.
    #[inline]
    pub fn validate_lengths(x_len: usize, y_len: usize) -> Result<(), DataError> {
        if x_len != y_len {
            return Err(DataError::MismatchedInputs { x_len, y_len });
        }
        Ok(())
    }

    // ========================================================================
    // Index Validation
    // ========================================================================

    /// Validate an element index against `[0, size)`.
    #[inline]
    pub fn validate_index(index: usize, size: usize) -> Result<usize, DataError> {
        if index >= size {
            return Err(DataError::IndexOutOfBounds { index, size });
        }
        Ok(index)
    }

    /// Validate that `len` values written from `offset` fit in `size` slots.
    #[inline]
    pub fn validate_span(offset: usize, len: usize, size: usize) -> Result<(), DataError> {
        if offset.checked_add(len).map_or(true, |end| end > size) {
            return Err(DataError::Overrun { offset, len, size });
        }
        Ok(())
    }

    // ========================================================================
    // Dimension Validation
    // ========================================================================

    /// Validate the edges and width of a binned dimension.
    pub fn validate_bins<T: Float>(min: T, max: T, delta: T) -> Result<(), DataError> {
        for v in [min, max, delta] {
            Self::validate_scalar(v)?;
        }
        if delta <= T::zero() {
            return Err(DataError::InvalidDelta(to_f64(delta)));
        }
        if max <= min {
            return Err(DataError::InvalidRange {
                min: to_f64(min),
                max: to_f64(max),
            });
        }
        let eps = T::from(SEQUENCE_EPSILON).unwrap_or_else(T::epsilon);
        if (max - min) / delta + eps < T::one() {
            return Err(DataError::InvalidDelta(to_f64(delta)));
        }
        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    #[inline]
    pub fn validate_scalar<T: Float>(val: T) -> Result<(), DataError> {
        if !val.is_finite() {
            return Err(DataError::NonFiniteValue(to_f64(val)));
        }
        Ok(())
    }
}

/// Lossy conversion used for error context.
#[inline]
pub(crate) fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

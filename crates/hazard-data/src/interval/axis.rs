//! Per-dimension bin metadata.
//!
//! An [`Axis`] records the edges (`min`, `max`), width (`delta`) and
//! bin-center keys of one container dimension. Keys are generated once and
//! held in an `Arc<[T]>`, so builders derived from a container, the
//! container itself, and every row or column view share a single copy.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::keys::{index_of, keys};
use crate::math::ops;
use crate::primitives::errors::DataError;
use crate::primitives::validator::Validator;

/// Edges, width and bin-center keys of one dimension.
#[derive(Debug, Clone)]
pub struct Axis<T> {
    min: T,
    max: T,
    delta: T,
    keys: Arc<[T]>,
}

impl<T: Float> Axis<T> {
    /// Define a dimension from its outer bin edges and bin width.
    pub fn new(min: T, max: T, delta: T) -> Result<Self, DataError> {
        let keys = keys(min, max, delta)?;
        Ok(Self {
            min,
            max,
            delta,
            keys: Arc::from(keys),
        })
    }

    /// Lower edge of the lowermost bin.
    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper edge of the uppermost bin, as supplied.
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    /// Bin width.
    #[inline]
    pub fn delta(&self) -> T {
        self.delta
    }

    /// Bin centers, ascending.
    #[inline]
    pub fn keys(&self) -> &[T] {
        &self.keys
    }

    /// Number of bins.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false; an axis has at least one bin.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Index of the bin containing `value`.
    #[inline]
    pub fn index_of(&self, value: T) -> Result<usize, DataError> {
        index_of(self.min, self.delta, value, self.keys.len())
    }

    /// Check `index` against the number of bins.
    #[inline]
    pub fn check_index(&self, index: usize) -> Result<usize, DataError> {
        Validator::validate_index(index, self.keys.len())
    }

    /// Whether both axes have the same keys, by identity then by value.
    #[inline]
    pub fn same_keys(&self, other: &Self) -> bool {
        ops::same_keys(&self.keys, &other.keys)
    }

    #[inline]
    pub(crate) fn key_array(&self) -> &Arc<[T]> {
        &self.keys
    }
}

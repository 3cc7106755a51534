//! One-dimensional interval data.
//!
//! ## Purpose
//!
//! [`IntervalArray`] is an immutable array of values arranged by increasing,
//! uniformly spaced bins. Keys are bin centers; lookups by value are resolved
//! against bin edges.
//!
//! ## Key concepts
//!
//! * **Value vs. index access**: [`IntervalArray::get`] takes a value that is
//!   binned; [`IntervalArray::get_at`] takes a bin index. The two are
//!   deliberately distinct methods.
//! * **Builder**: An [`IntervalArrayBuilder`] is defined, filled and built
//!   exactly once.
//!
//! ## Invariants
//!
//! * `data.len() == rows().len()`.
//!
//! ## Non-goals
//!
//! * High precision keys (more than 4 decimal places).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{sync::Arc, vec::Vec};
#[cfg(feature = "std")]
use std::{sync::Arc, vec::Vec};

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::interval::axis::Axis;
use crate::interval::format;
use crate::interval::state::{BuilderState, Lifecycle};
use crate::math::ops;
use crate::primitives::errors::{DataError, Dimension};
use crate::primitives::validator::Validator;
use crate::primitives::window::Window;
use crate::sequence::xy::XySequence;

// ============================================================================
// Interval Array
// ============================================================================

/// An immutable, 1-dimensional array of binned values.
#[derive(Debug, Clone)]
pub struct IntervalArray<T> {
    rows: Axis<T>,
    data: Arc<[T]>,
}

impl<T: Float> IntervalArray<T> {
    /// Start a new builder.
    #[inline]
    pub fn builder() -> IntervalArrayBuilder<T> {
        IntervalArrayBuilder::new()
    }

    pub(crate) fn from_parts(rows: Axis<T>, data: Arc<[T]>) -> Self {
        debug_assert_eq!(rows.len(), data.len());
        Self { rows, data }
    }

    /// Value of the bin containing `row`.
    ///
    /// Not to be confused with [`get_at`](Self::get_at), which takes an index.
    pub fn get(&self, row: T) -> core::result::Result<T, DataError> {
        self.rows.index_of(row).map(|i| self.data[i])
    }

    /// Value of the bin at `index`.
    pub fn get_at(&self, index: usize) -> core::result::Result<T, DataError> {
        self.rows.check_index(index).map(|i| self.data[i])
    }

    /// All values as a sequence of `(bin center, value)` pairs.
    ///
    /// The sequence shares this array's key and value storage.
    pub fn values(&self) -> XySequence<T> {
        XySequence::from_parts(
            Arc::clone(self.rows.key_array()),
            Window::full(Arc::clone(&self.data)),
        )
    }

    /// Row keys (bin centers).
    #[inline]
    pub fn rows(&self) -> &[T] {
        self.rows.keys()
    }

    /// Lower edge of the lowermost bin.
    #[inline]
    pub fn row_min(&self) -> T {
        self.rows.min()
    }

    /// Upper edge of the uppermost bin.
    #[inline]
    pub fn row_max(&self) -> T {
        self.rows.max()
    }

    /// Bin width.
    #[inline]
    pub fn row_delta(&self) -> T {
        self.rows.delta()
    }

    /// Row dimension metadata.
    #[inline]
    pub fn row_axis(&self) -> &Axis<T> {
        &self.rows
    }

    /// Number of bins.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; an array has at least one bin.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sum of all values.
    #[inline]
    pub fn sum(&self) -> T {
        ops::sum(&self.data)
    }

    /// Index of the smallest value (first occurrence).
    #[inline]
    pub fn min_index(&self) -> usize {
        ops::min_index(&self.data)
    }

    /// Index of the largest value (first occurrence).
    #[inline]
    pub fn max_index(&self) -> usize {
        ops::max_index(&self.data)
    }
}

impl<T: Float> Display for IntervalArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        format::write_keys(f, "", self.rows())?;
        format::write_values(f, &self.data)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Single-use builder of [`IntervalArray`]s.
///
/// Rows must be defined before any data is added.
#[derive(Debug)]
pub struct IntervalArrayBuilder<T> {
    rows: Option<Axis<T>>,
    data: Option<Vec<T>>,
    lifecycle: Lifecycle,
}

impl<T: Float> Default for IntervalArrayBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> IntervalArrayBuilder<T> {
    /// Create an unconfigured builder.
    pub fn new() -> Self {
        Self {
            rows: None,
            data: None,
            lifecycle: Lifecycle::default(),
        }
    }

    /// Create a builder with the structure and values of `array`.
    pub fn copy_of(array: &IntervalArray<T>) -> Self {
        Self {
            rows: Some(array.rows.clone()),
            data: Some(array.data.to_vec()),
            lifecycle: Lifecycle::configured(),
        }
    }

    /// Create a zero-valued builder with the structure of `model`.
    pub fn from_model(model: &IntervalArray<T>) -> Self {
        Self {
            rows: Some(model.rows.clone()),
            data: Some(vec![T::zero(); model.len()]),
            lifecycle: Lifecycle::configured(),
        }
    }

    /// Define the row bins from the outer edges and bin width.
    pub fn rows(mut self, min: T, max: T, delta: T) -> Self {
        if self.lifecycle.may_define() {
            match Axis::new(min, max, delta) {
                Ok(axis) => {
                    self.data = Some(vec![T::zero(); axis.len()]);
                    self.rows = Some(axis);
                    self.lifecycle.configure();
                }
                Err(err) => self.lifecycle.defer(err),
            }
        }
        self
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> BuilderState {
        self.lifecycle.state()
    }

    fn ready(&mut self) -> core::result::Result<(&Axis<T>, &mut [T]), DataError> {
        self.lifecycle.check()?;
        let rows = self
            .rows
            .as_ref()
            .ok_or(DataError::DimensionUnset(Dimension::Row))?;
        let data = self
            .data
            .as_deref_mut()
            .ok_or(DataError::DimensionUnset(Dimension::Row))?;
        Ok((rows, data))
    }

    /// Index of the row bin that would contain `row`.
    pub fn row_index(&self, row: T) -> core::result::Result<usize, DataError> {
        self.lifecycle.check()?;
        self.rows
            .as_ref()
            .ok_or(DataError::DimensionUnset(Dimension::Row))?
            .index_of(row)
    }

    /// Set the value of the bin containing `row`.
    pub fn set(&mut self, row: T, value: T) -> core::result::Result<&mut Self, DataError> {
        let (rows, data) = self.ready()?;
        data[rows.index_of(row)?] = value;
        Ok(self)
    }

    /// Set the value of the bin at `index`.
    pub fn set_at(&mut self, index: usize, value: T) -> core::result::Result<&mut Self, DataError> {
        let (rows, data) = self.ready()?;
        data[rows.check_index(index)?] = value;
        Ok(self)
    }

    /// Add to the value of the bin containing `row`.
    pub fn add(&mut self, row: T, value: T) -> core::result::Result<&mut Self, DataError> {
        let (rows, data) = self.ready()?;
        let i = rows.index_of(row)?;
        data[i] = data[i] + value;
        Ok(self)
    }

    /// Add to the value of the bin at `index`.
    pub fn add_at(&mut self, index: usize, value: T) -> core::result::Result<&mut Self, DataError> {
        let (rows, data) = self.ready()?;
        let i = rows.check_index(index)?;
        data[i] = data[i] + value;
        Ok(self)
    }

    /// Add `values` element-wise, starting at the first bin.
    ///
    /// Fails with [`DataError::Overrun`] if there are more values than bins.
    pub fn add_values(&mut self, values: &[T]) -> core::result::Result<&mut Self, DataError> {
        let (_, data) = self.ready()?;
        Validator::validate_span(0, values.len(), data.len())?;
        ops::add_assign(&mut data[..values.len()], values);
        Ok(self)
    }

    /// Add the values of `array`, which must have the same rows.
    ///
    /// Cheapest when both were derived from the same model.
    pub fn add_array(
        &mut self,
        array: &IntervalArray<T>,
    ) -> core::result::Result<&mut Self, DataError> {
        let (rows, data) = self.ready()?;
        if !rows.same_keys(&array.rows) {
            return Err(DataError::MismatchedKeys("array rows differ"));
        }
        ops::add_assign(data, &array.data);
        Ok(self)
    }

    /// Multiply every value by `scale`.
    pub fn multiply(&mut self, scale: T) -> core::result::Result<&mut Self, DataError> {
        let (_, data) = self.ready()?;
        ops::scale(scale, data);
        Ok(self)
    }

    /// Build the array, consuming this builder's data.
    ///
    /// May be called once; later calls fail with [`DataError::AlreadyBuilt`].
    pub fn build(&mut self) -> core::result::Result<IntervalArray<T>, DataError> {
        self.ready()?;
        self.lifecycle.finish();
        let rows = self
            .rows
            .take()
            .ok_or(DataError::DimensionUnset(Dimension::Row))?;
        let data = self
            .data
            .take()
            .ok_or(DataError::DimensionUnset(Dimension::Row))?;
        debug!(rows = rows.len(), "built interval array");
        Ok(IntervalArray::from_parts(rows, Arc::from(data)))
    }

    /// Fill every bin with `loader(row_key)` and build.
    ///
    /// Overwrites anything previously set or added.
    pub fn build_with<F>(&mut self, mut loader: F) -> core::result::Result<IntervalArray<T>, DataError>
    where
        F: FnMut(T) -> T,
    {
        let (rows, data) = self.ready()?;
        for (cell, &row) in data.iter_mut().zip(rows.keys()) {
            *cell = loader(row);
        }
        self.build()
    }
}

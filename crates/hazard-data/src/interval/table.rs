//! Two-dimensional interval data.
//!
//! ## Purpose
//!
//! [`IntervalTable`] is an immutable, row-major table of values binned by
//! row and column. Rows are exposed as [`XySequence`]s over the column keys
//! and [`IntervalTable::collapse`] sums across columns into an
//! [`IntervalArray`].
//!
//! ## Design notes
//!
//! * **Zero-copy rows**: A row view shares the column key array and a window
//!   of the backing data. Views are immutable because the table is.
//! * **Deferred configuration errors**: `rows` and `columns` are fluent; a
//!   bad definition surfaces on the next data call or on `build()`.
//!
//! ## Invariants
//!
//! * `data.len() == rows().len() * columns().len()`.
//! * Value `(r, c)` lives at `data[r * columns().len() + c]`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{sync::Arc, vec::Vec};
#[cfg(feature = "std")]
use std::{sync::Arc, vec::Vec};

// External dependencies
use core::fmt::{Display, Formatter, Result};
#[cfg(feature = "ndarray")]
use ndarray::Array2;
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::interval::array::IntervalArray;
use crate::interval::axis::Axis;
use crate::interval::format;
use crate::interval::state::{BuilderState, Lifecycle};
use crate::math::ops;
use crate::primitives::errors::{DataError, Dimension};
use crate::primitives::validator::Validator;
use crate::primitives::window::Window;
use crate::sequence::view::XyView;
use crate::sequence::xy::XySequence;

// ============================================================================
// Interval Table
// ============================================================================

/// An immutable, 2-dimensional table of binned values.
#[derive(Debug, Clone)]
pub struct IntervalTable<T> {
    rows: Axis<T>,
    columns: Axis<T>,
    data: Arc<[T]>,
}

impl<T: Float> IntervalTable<T> {
    /// Start a new builder.
    #[inline]
    pub fn builder() -> IntervalTableBuilder<T> {
        IntervalTableBuilder::new()
    }

    pub(crate) fn from_parts(rows: Axis<T>, columns: Axis<T>, data: Arc<[T]>) -> Self {
        debug_assert_eq!(rows.len() * columns.len(), data.len());
        Self {
            rows,
            columns,
            data,
        }
    }

    #[inline]
    fn offset(&self, ri: usize, ci: usize) -> usize {
        ri * self.columns.len() + ci
    }

    /// Value of the bin containing `(row, column)`.
    pub fn get(&self, row: T, column: T) -> core::result::Result<T, DataError> {
        let ri = self.rows.index_of(row)?;
        let ci = self.columns.index_of(column)?;
        Ok(self.data[self.offset(ri, ci)])
    }

    /// Value of the bin at `(row_index, column_index)`.
    pub fn get_at(&self, row_index: usize, column_index: usize) -> core::result::Result<T, DataError> {
        let ri = self.rows.check_index(row_index)?;
        let ci = self.columns.check_index(column_index)?;
        Ok(self.data[self.offset(ri, ci)])
    }

    /// The row containing `row`, as values keyed by column.
    pub fn row(&self, row: T) -> core::result::Result<XySequence<T>, DataError> {
        self.rows.index_of(row).map(|ri| self.row_view(ri))
    }

    /// The row at `index`, as values keyed by column.
    pub fn row_at(&self, index: usize) -> core::result::Result<XySequence<T>, DataError> {
        self.rows.check_index(index).map(|ri| self.row_view(ri))
    }

    fn row_view(&self, ri: usize) -> XySequence<T> {
        let nc = self.columns.len();
        XySequence::from_parts(
            Arc::clone(self.columns.key_array()),
            Window::new(Arc::clone(&self.data), ri * nc, nc),
        )
    }

    /// Sum across columns, yielding an array keyed by this table's rows.
    pub fn collapse(&self) -> IntervalArray<T> {
        let sums = ops::collapse(&self.data, self.columns.len());
        debug!(
            rows = self.rows.len(),
            columns = self.columns.len(),
            "collapsed interval table"
        );
        IntervalArray::from_parts(self.rows.clone(), Arc::from(sums))
    }

    /// Row keys (bin centers).
    #[inline]
    pub fn rows(&self) -> &[T] {
        self.rows.keys()
    }

    /// Column keys (bin centers).
    #[inline]
    pub fn columns(&self) -> &[T] {
        self.columns.keys()
    }

    #[inline]
    pub fn row_min(&self) -> T {
        self.rows.min()
    }

    #[inline]
    pub fn row_max(&self) -> T {
        self.rows.max()
    }

    #[inline]
    pub fn row_delta(&self) -> T {
        self.rows.delta()
    }

    #[inline]
    pub fn column_min(&self) -> T {
        self.columns.min()
    }

    #[inline]
    pub fn column_max(&self) -> T {
        self.columns.max()
    }

    #[inline]
    pub fn column_delta(&self) -> T {
        self.columns.delta()
    }

    /// Row dimension metadata.
    #[inline]
    pub fn row_axis(&self) -> &Axis<T> {
        &self.rows
    }

    /// Column dimension metadata.
    #[inline]
    pub fn column_axis(&self) -> &Axis<T> {
        &self.columns
    }

    /// Sum of all values.
    #[inline]
    pub fn sum(&self) -> T {
        ops::sum(&self.data)
    }

    /// `(row, column)` indices of the smallest value, first in row-major order.
    pub fn min_index(&self) -> (usize, usize) {
        self.split(ops::min_index(&self.data))
    }

    /// `(row, column)` indices of the largest value, first in row-major order.
    pub fn max_index(&self) -> (usize, usize) {
        self.split(ops::max_index(&self.data))
    }

    #[inline]
    fn split(&self, flat: usize) -> (usize, usize) {
        let nc = self.columns.len();
        (flat / nc, flat % nc)
    }

    /// Copy the values into an `ndarray` of shape `(rows, columns)`.
    #[cfg(feature = "ndarray")]
    pub fn to_array2(&self) -> Array2<T> {
        let nc = self.columns.len();
        Array2::from_shape_fn((self.rows.len(), nc), |(r, c)| self.data[r * nc + c])
    }
}

impl<T: Float> Display for IntervalTable<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        format::write_keys(f, format::TABLE_PREFIX, self.columns())?;
        let nc = self.columns.len();
        for (&key, row) in self.rows().iter().zip(self.data.chunks_exact(nc)) {
            format::write_label(f, key)?;
            format::write_values(f, row)?;
        }
        Ok(())
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Single-use builder of [`IntervalTable`]s.
///
/// Rows and columns must both be defined before any data is added.
#[derive(Debug)]
pub struct IntervalTableBuilder<T> {
    rows: Option<Axis<T>>,
    columns: Option<Axis<T>>,
    data: Option<Vec<T>>,
    lifecycle: Lifecycle,
}

impl<T: Float> Default for IntervalTableBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> IntervalTableBuilder<T> {
    /// Create an unconfigured builder.
    pub fn new() -> Self {
        Self {
            rows: None,
            columns: None,
            data: None,
            lifecycle: Lifecycle::default(),
        }
    }

    /// Create a builder with the structure and values of `table`.
    pub fn copy_of(table: &IntervalTable<T>) -> Self {
        Self {
            rows: Some(table.rows.clone()),
            columns: Some(table.columns.clone()),
            data: Some(table.data.to_vec()),
            lifecycle: Lifecycle::configured(),
        }
    }

    /// Create a zero-valued builder with the structure of `model`.
    pub fn from_model(model: &IntervalTable<T>) -> Self {
        Self {
            rows: Some(model.rows.clone()),
            columns: Some(model.columns.clone()),
            data: Some(vec![T::zero(); model.data.len()]),
            lifecycle: Lifecycle::configured(),
        }
    }

    /// Define the row bins from the outer edges and bin width.
    pub fn rows(mut self, min: T, max: T, delta: T) -> Self {
        if self.lifecycle.may_define() {
            match Axis::new(min, max, delta) {
                Ok(axis) => {
                    self.rows = Some(axis);
                    self.init();
                }
                Err(err) => self.lifecycle.defer(err),
            }
        }
        self
    }

    /// Define the column bins from the outer edges and bin width.
    pub fn columns(mut self, min: T, max: T, delta: T) -> Self {
        if self.lifecycle.may_define() {
            match Axis::new(min, max, delta) {
                Ok(axis) => {
                    self.columns = Some(axis);
                    self.init();
                }
                Err(err) => self.lifecycle.defer(err),
            }
        }
        self
    }

    fn init(&mut self) {
        if let (Some(rows), Some(columns)) = (&self.rows, &self.columns) {
            self.data = Some(vec![T::zero(); rows.len() * columns.len()]);
            self.lifecycle.configure();
        }
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> BuilderState {
        self.lifecycle.state()
    }

    fn ready(&mut self) -> core::result::Result<(&Axis<T>, &Axis<T>, &mut [T]), DataError> {
        self.lifecycle.check()?;
        let rows = self
            .rows
            .as_ref()
            .ok_or(DataError::DimensionUnset(Dimension::Row))?;
        let columns = self
            .columns
            .as_ref()
            .ok_or(DataError::DimensionUnset(Dimension::Column))?;
        let data = self
            .data
            .as_deref_mut()
            .ok_or(DataError::DimensionUnset(Dimension::Column))?;
        Ok((rows, columns, data))
    }

    /// Index of the row bin that would contain `row`.
    pub fn row_index(&self, row: T) -> core::result::Result<usize, DataError> {
        self.lifecycle.check()?;
        self.rows
            .as_ref()
            .ok_or(DataError::DimensionUnset(Dimension::Row))?
            .index_of(row)
    }

    /// Index of the column bin that would contain `column`.
    pub fn column_index(&self, column: T) -> core::result::Result<usize, DataError> {
        self.lifecycle.check()?;
        self.columns
            .as_ref()
            .ok_or(DataError::DimensionUnset(Dimension::Column))?
            .index_of(column)
    }

    /// Set the value of the bin containing `(row, column)`.
    pub fn set(&mut self, row: T, column: T, value: T) -> core::result::Result<&mut Self, DataError> {
        let (rows, columns, data) = self.ready()?;
        let i = rows.index_of(row)? * columns.len() + columns.index_of(column)?;
        data[i] = value;
        Ok(self)
    }

    /// Set the value of the bin at `(row_index, column_index)`.
    pub fn set_at(
        &mut self,
        row_index: usize,
        column_index: usize,
        value: T,
    ) -> core::result::Result<&mut Self, DataError> {
        let (rows, columns, data) = self.ready()?;
        let i = rows.check_index(row_index)? * columns.len() + columns.check_index(column_index)?;
        data[i] = value;
        Ok(self)
    }

    /// Add to the value of the bin containing `(row, column)`.
    pub fn add(&mut self, row: T, column: T, value: T) -> core::result::Result<&mut Self, DataError> {
        let (rows, columns, data) = self.ready()?;
        let i = rows.index_of(row)? * columns.len() + columns.index_of(column)?;
        data[i] = data[i] + value;
        Ok(self)
    }

    /// Add to the value of the bin at `(row_index, column_index)`.
    pub fn add_at(
        &mut self,
        row_index: usize,
        column_index: usize,
        value: T,
    ) -> core::result::Result<&mut Self, DataError> {
        let (rows, columns, data) = self.ready()?;
        let i = rows.check_index(row_index)? * columns.len() + columns.check_index(column_index)?;
        data[i] = data[i] + value;
        Ok(self)
    }

    /// Add `values` to the row containing `row`, starting at the first column.
    ///
    /// Fails with [`DataError::Overrun`] if there are more values than columns.
    pub fn add_row(&mut self, row: T, values: &[T]) -> core::result::Result<&mut Self, DataError> {
        let (rows, columns, data) = self.ready()?;
        let nc = columns.len();
        let start = rows.index_of(row)? * nc;
        Validator::validate_span(0, values.len(), nc)?;
        ops::add_assign(&mut data[start..start + values.len()], values);
        Ok(self)
    }

    /// Add the y-values of `sequence` to the row containing `row`.
    ///
    /// The sequence's x-values are ignored.
    pub fn add_row_sequence<S>(&mut self, row: T, sequence: &S) -> core::result::Result<&mut Self, DataError>
    where
        S: XyView<T> + ?Sized,
    {
        self.add_row(row, sequence.y_values())
    }

    /// Overwrite part of the row containing `row` with `values`, starting at
    /// the column bin containing `column`.
    pub fn set_row_from(
        &mut self,
        row: T,
        column: T,
        values: &[T],
    ) -> core::result::Result<&mut Self, DataError> {
        let (rows, columns, data) = self.ready()?;
        let nc = columns.len();
        let ri = rows.index_of(row)?;
        let ci = columns.index_of(column)?;
        Validator::validate_span(ci, values.len(), nc)?;
        let start = ri * nc + ci;
        data[start..start + values.len()].copy_from_slice(values);
        Ok(self)
    }

    /// Add the values of `table`, which must have the same rows and columns.
    pub fn add_table(
        &mut self,
        table: &IntervalTable<T>,
    ) -> core::result::Result<&mut Self, DataError> {
        let (rows, columns, data) = self.ready()?;
        if !rows.same_keys(&table.rows) {
            return Err(DataError::MismatchedKeys("table rows differ"));
        }
        if !columns.same_keys(&table.columns) {
            return Err(DataError::MismatchedKeys("table columns differ"));
        }
        ops::add_assign(data, &table.data);
        Ok(self)
    }

    /// Multiply every value by `scale`.
    pub fn multiply(&mut self, scale: T) -> core::result::Result<&mut Self, DataError> {
        let (_, _, data) = self.ready()?;
        ops::scale(scale, data);
        Ok(self)
    }

    /// Build the table, consuming this builder's data.
    ///
    /// May be called once; later calls fail with [`DataError::AlreadyBuilt`].
    pub fn build(&mut self) -> core::result::Result<IntervalTable<T>, DataError> {
        self.ready()?;
        let (Some(rows), Some(columns), Some(data)) =
            (self.rows.take(), self.columns.take(), self.data.take())
        else {
            return Err(DataError::DimensionUnset(Dimension::Row));
        };
        self.lifecycle.finish();
        debug!(
            rows = rows.len(),
            columns = columns.len(),
            "built interval table"
        );
        Ok(IntervalTable::from_parts(rows, columns, Arc::from(data)))
    }

    /// Fill every bin with `loader(row_key, column_key)` and build.
    ///
    /// Overwrites anything previously set or added.
    pub fn build_with<F>(&mut self, mut loader: F) -> core::result::Result<IntervalTable<T>, DataError>
    where
        F: FnMut(T, T) -> T,
    {
        let (rows, columns, data) = self.ready()?;
        let nc = columns.len();
        for (&r, chunk) in rows.keys().iter().zip(data.chunks_exact_mut(nc)) {
            for (cell, &c) in chunk.iter_mut().zip(columns.keys()) {
                *cell = loader(r, c);
            }
        }
        self.build()
    }
}

//! Three-dimensional interval data.
//!
//! [`IntervalVolume`] extends [`IntervalTable`] with a level dimension.
//! Values are stored row-major with levels innermost, so a `(row, column)`
//! pair addresses a contiguous run of level values that
//! [`IntervalVolume::column`] exposes without copying.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{sync::Arc, vec::Vec};
#[cfg(feature = "std")]
use std::{sync::Arc, vec::Vec};

// External dependencies
use core::fmt::{Display, Formatter, Result};
#[cfg(feature = "ndarray")]
use ndarray::Array3;
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::interval::axis::Axis;
use crate::interval::format;
use crate::interval::state::{BuilderState, Lifecycle};
use crate::interval::table::IntervalTable;
use crate::math::ops;
use crate::primitives::errors::{DataError, Dimension};
use crate::primitives::validator::Validator;
use crate::primitives::window::Window;
use crate::sequence::view::XyView;
use crate::sequence::xy::XySequence;

// ============================================================================
// Interval Volume
// ============================================================================

/// An immutable, 3-dimensional volume of binned values.
#[derive(Debug, Clone)]
pub struct IntervalVolume<T> {
    rows: Axis<T>,
    columns: Axis<T>,
    levels: Axis<T>,
    data: Arc<[T]>,
}

impl<T: Float> IntervalVolume<T> {
    /// Start a new builder.
    #[inline]
    pub fn builder() -> IntervalVolumeBuilder<T> {
        IntervalVolumeBuilder::new()
    }

    #[inline]
    fn offset(&self, ri: usize, ci: usize, li: usize) -> usize {
        (ri * self.columns.len() + ci) * self.levels.len() + li
    }

    /// Value of the bin containing `(row, column, level)`.
    pub fn get(&self, row: T, column: T, level: T) -> core::result::Result<T, DataError> {
        let ri = self.rows.index_of(row)?;
        let ci = self.columns.index_of(column)?;
        let li = self.levels.index_of(level)?;
        Ok(self.data[self.offset(ri, ci, li)])
    }

    /// Value of the bin at `(row_index, column_index, level_index)`.
    pub fn get_at(
        &self,
        row_index: usize,
        column_index: usize,
        level_index: usize,
    ) -> core::result::Result<T, DataError> {
        let ri = self.rows.check_index(row_index)?;
        let ci = self.columns.check_index(column_index)?;
        let li = self.levels.check_index(level_index)?;
        Ok(self.data[self.offset(ri, ci, li)])
    }

    /// The level values at `(row, column)`, keyed by level.
    pub fn column(&self, row: T, column: T) -> core::result::Result<XySequence<T>, DataError> {
        let ri = self.rows.index_of(row)?;
        let ci = self.columns.index_of(column)?;
        Ok(self.column_view(ri, ci))
    }

    /// The level values at `(row_index, column_index)`, keyed by level.
    pub fn column_at(
        &self,
        row_index: usize,
        column_index: usize,
    ) -> core::result::Result<XySequence<T>, DataError> {
        let ri = self.rows.check_index(row_index)?;
        let ci = self.columns.check_index(column_index)?;
        Ok(self.column_view(ri, ci))
    }

    fn column_view(&self, ri: usize, ci: usize) -> XySequence<T> {
        XySequence::from_parts(
            Arc::clone(self.levels.key_array()),
            Window::new(Arc::clone(&self.data), self.offset(ri, ci, 0), self.levels.len()),
        )
    }

    /// Sum across levels, yielding a table keyed by this volume's rows and
    /// columns.
    pub fn collapse(&self) -> IntervalTable<T> {
        let sums = ops::collapse(&self.data, self.levels.len());
        debug!(
            rows = self.rows.len(),
            columns = self.columns.len(),
            levels = self.levels.len(),
            "collapsed interval volume"
        );
        IntervalTable::from_parts(self.rows.clone(), self.columns.clone(), Arc::from(sums))
    }

    #[inline]
    pub fn rows(&self) -> &[T] {
        self.rows.keys()
    }

    #[inline]
    pub fn columns(&self) -> &[T] {
        self.columns.keys()
    }

    #[inline]
    pub fn levels(&self) -> &[T] {
        self.levels.keys()
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

    #[inline]
    pub fn level_min(&self) -> T {
        self.levels.min()
    }

    #[inline]
    pub fn level_max(&self) -> T {
        self.levels.max()
    }

    #[inline]
    pub fn level_delta(&self) -> T {
        self.levels.delta()
    }

    #[inline]
    pub fn row_axis(&self) -> &Axis<T> {
        &self.rows
    }

    #[inline]
    pub fn column_axis(&self) -> &Axis<T> {
        &self.columns
    }

    #[inline]
    pub fn level_axis(&self) -> &Axis<T> {
        &self.levels
    }

    /// Sum of all values.
    #[inline]
    pub fn sum(&self) -> T {
        ops::sum(&self.data)
    }

    /// `(row, column, level)` indices of the smallest value.
    pub fn min_index(&self) -> (usize, usize, usize) {
        self.split(ops::min_index(&self.data))
    }

    /// `(row, column, level)` indices of the largest value.
    pub fn max_index(&self) -> (usize, usize, usize) {
        self.split(ops::max_index(&self.data))
    }

    #[inline]
    fn split(&self, flat: usize) -> (usize, usize, usize) {
        let nl = self.levels.len();
        let nc = self.columns.len();
        (flat / (nc * nl), (flat / nl) % nc, flat % nl)
    }

    /// Copy the values into an `ndarray` of shape `(rows, columns, levels)`.
    #[cfg(feature = "ndarray")]
    pub fn to_array3(&self) -> Array3<T> {
        let shape = (self.rows.len(), self.columns.len(), self.levels.len());
        Array3::from_shape_fn(shape, |(r, c, l)| self.data[self.offset(r, c, l)])
    }
}

impl<T: Float> Display for IntervalVolume<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        format::write_keys(f, format::VOLUME_PREFIX, self.levels())?;
        let nl = self.levels.len();
        let mut columns = self.data.chunks_exact(nl);
        for &r in self.rows() {
            for &c in self.columns() {
                format::write_label(f, r)?;
                format::write_label(f, c)?;
                if let Some(values) = columns.next() {
                    format::write_values(f, values)?;
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Single-use builder of [`IntervalVolume`]s.
///
/// Rows, columns and levels must all be defined before any data is added.
#[derive(Debug)]
pub struct IntervalVolumeBuilder<T> {
    rows: Option<Axis<T>>,
    columns: Option<Axis<T>>,
    levels: Option<Axis<T>>,
    data: Option<Vec<T>>,
    lifecycle: Lifecycle,
}

impl<T: Float> Default for IntervalVolumeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Axes and backing data of a configured builder.
type Parts<'a, T> = (&'a Axis<T>, &'a Axis<T>, &'a Axis<T>, &'a mut [T]);

impl<T: Float> IntervalVolumeBuilder<T> {
    /// Create an unconfigured builder.
    pub fn new() -> Self {
        Self {
            rows: None,
            columns: None,
            levels: None,
            data: None,
            lifecycle: Lifecycle::default(),
        }
    }

    /// Create a builder with the structure and values of `volume`.
    pub fn copy_of(volume: &IntervalVolume<T>) -> Self {
        Self {
            rows: Some(volume.rows.clone()),
            columns: Some(volume.columns.clone()),
            levels: Some(volume.levels.clone()),
            data: Some(volume.data.to_vec()),
            lifecycle: Lifecycle::configured(),
        }
    }

    /// Create a zero-valued builder with the structure of `model`.
    pub fn from_model(model: &IntervalVolume<T>) -> Self {
        Self {
            rows: Some(model.rows.clone()),
            columns: Some(model.columns.clone()),
            levels: Some(model.levels.clone()),
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

    /// Define the level bins from the outer edges and bin width.
    pub fn levels(mut self, min: T, max: T, delta: T) -> Self {
        if self.lifecycle.may_define() {
            match Axis::new(min, max, delta) {
                Ok(axis) => {
                    self.levels = Some(axis);
                    self.init();
                }
                Err(err) => self.lifecycle.defer(err),
            }
        }
        self
    }

    fn init(&mut self) {
        if let (Some(rows), Some(columns), Some(levels)) = (&self.rows, &self.columns, &self.levels)
        {
            self.data = Some(vec![T::zero(); rows.len() * columns.len() * levels.len()]);
            self.lifecycle.configure();
        }
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> BuilderState {
        self.lifecycle.state()
    }

    fn ready(&mut self) -> core::result::Result<Parts<'_, T>, DataError> {
        self.lifecycle.check()?;
        let rows = self
            .rows
            .as_ref()
            .ok_or(DataError::DimensionUnset(Dimension::Row))?;
        let columns = self
            .columns
            .as_ref()
            .ok_or(DataError::DimensionUnset(Dimension::Column))?;
        let levels = self
            .levels
            .as_ref()
            .ok_or(DataError::DimensionUnset(Dimension::Level))?;
        let data = self
            .data
            .as_deref_mut()
            .ok_or(DataError::DimensionUnset(Dimension::Level))?;
        Ok((rows, columns, levels, data))
    }

    fn axis<'a>(
        &self,
        axis: &'a Option<Axis<T>>,
        dim: Dimension,
    ) -> core::result::Result<&'a Axis<T>, DataError> {
        self.lifecycle.check()?;
        axis.as_ref().ok_or(DataError::DimensionUnset(dim))
    }

    /// Index of the row bin that would contain `row`.
    pub fn row_index(&self, row: T) -> core::result::Result<usize, DataError> {
        self.axis(&self.rows, Dimension::Row)?.index_of(row)
    }

    /// Index of the column bin that would contain `column`.
    pub fn column_index(&self, column: T) -> core::result::Result<usize, DataError> {
        self.axis(&self.columns, Dimension::Column)?.index_of(column)
    }

    /// Index of the level bin that would contain `level`.
    pub fn level_index(&self, level: T) -> core::result::Result<usize, DataError> {
        self.axis(&self.levels, Dimension::Level)?.index_of(level)
    }

    /// Set the value of the bin containing `(row, column, level)`.
    pub fn set(
        &mut self,
        row: T,
        column: T,
        level: T,
        value: T,
    ) -> core::result::Result<&mut Self, DataError> {
        let (rows, columns, levels, data) = self.ready()?;
        let i = flat(
            columns,
            levels,
            rows.index_of(row)?,
            columns.index_of(column)?,
            levels.index_of(level)?,
        );
        data[i] = value;
        Ok(self)
    }

    /// Set the value of the bin at `(row_index, column_index, level_index)`.
    pub fn set_at(
        &mut self,
        row_index: usize,
        column_index: usize,
        level_index: usize,
        value: T,
    ) -> core::result::Result<&mut Self, DataError> {
        let (rows, columns, levels, data) = self.ready()?;
        let i = flat(
            columns,
            levels,
            rows.check_index(row_index)?,
            columns.check_index(column_index)?,
            levels.check_index(level_index)?,
        );
        data[i] = value;
        Ok(self)
    }

    /// Add to the value of the bin containing `(row, column, level)`.
    pub fn add(
        &mut self,
        row: T,
        column: T,
        level: T,
        value: T,
    ) -> core::result::Result<&mut Self, DataError> {
        let (rows, columns, levels, data) = self.ready()?;
        let i = flat(
            columns,
            levels,
            rows.index_of(row)?,
            columns.index_of(column)?,
            levels.index_of(level)?,
        );
        data[i] = data[i] + value;
        Ok(self)
    }

    /// Add to the value of the bin at `(row_index, column_index, level_index)`.
    pub fn add_at(
        &mut self,
        row_index: usize,
        column_index: usize,
        level_index: usize,
        value: T,
    ) -> core::result::Result<&mut Self, DataError> {
        let (rows, columns, levels, data) = self.ready()?;
        let i = flat(
            columns,
            levels,
            rows.check_index(row_index)?,
            columns.check_index(column_index)?,
            levels.check_index(level_index)?,
        );
        data[i] = data[i] + value;
        Ok(self)
    }

    /// Add `values` to the levels at `(row, column)`, starting at the first
    /// level.
    ///
    /// Fails with [`DataError::Overrun`] if there are more values than levels.
    pub fn add_column(
        &mut self,
        row: T,
        column: T,
        values: &[T],
    ) -> core::result::Result<&mut Self, DataError> {
        let (rows, columns, levels, data) = self.ready()?;
        let start = flat(columns, levels, rows.index_of(row)?, columns.index_of(column)?, 0);
        Validator::validate_span(0, values.len(), levels.len())?;
        ops::add_assign(&mut data[start..start + values.len()], values);
        Ok(self)
    }

    /// Add the y-values of `sequence` to the levels at `(row, column)`.
    ///
    /// Only the y-values are used; level keys are not compared.
    pub fn add_column_sequence<S>(
        &mut self,
        row: T,
        column: T,
        sequence: &S,
    ) -> core::result::Result<&mut Self, DataError>
    where
        S: XyView<T> + ?Sized,
    {
        self.add_column(row, column, sequence.y_values())
    }

    /// Overwrite part of the levels at `(row, column)` with `values`, starting
    /// at the level bin containing `level`.
    pub fn set_column_from(
        &mut self,
        row: T,
        column: T,
        level: T,
        values: &[T],
    ) -> core::result::Result<&mut Self, DataError> {
        let (rows, columns, levels, data) = self.ready()?;
        let li = levels.index_of(level)?;
        Validator::validate_span(li, values.len(), levels.len())?;
        let start = flat(columns, levels, rows.index_of(row)?, columns.index_of(column)?, li);
        data[start..start + values.len()].copy_from_slice(values);
        Ok(self)
    }

    /// Add the values of `volume`, which must have the same structure.
    pub fn add_volume(
        &mut self,
        volume: &IntervalVolume<T>,
    ) -> core::result::Result<&mut Self, DataError> {
        let (rows, columns, levels, data) = self.ready()?;
        if !rows.same_keys(&volume.rows) {
            return Err(DataError::MismatchedKeys("volume rows differ"));
        }
        if !columns.same_keys(&volume.columns) {
            return Err(DataError::MismatchedKeys("volume columns differ"));
        }
        if !levels.same_keys(&volume.levels) {
            return Err(DataError::MismatchedKeys("volume levels differ"));
        }
        ops::add_assign(data, &volume.data);
        Ok(self)
    }

    /// Multiply every value by `scale`.
    pub fn multiply(&mut self, scale: T) -> core::result::Result<&mut Self, DataError> {
        let (_, _, _, data) = self.ready()?;
        ops::scale(scale, data);
        Ok(self)
    }

    /// Build the volume, consuming this builder's data.
    ///
    /// May be called once; later calls fail with [`DataError::AlreadyBuilt`].
    pub fn build(&mut self) -> core::result::Result<IntervalVolume<T>, DataError> {
        self.ready()?;
        let (Some(rows), Some(columns), Some(levels), Some(data)) = (
            self.rows.take(),
            self.columns.take(),
            self.levels.take(),
            self.data.take(),
        ) else {
            return Err(DataError::DimensionUnset(Dimension::Row));
        };
        self.lifecycle.finish();
        debug!(
            rows = rows.len(),
            columns = columns.len(),
            levels = levels.len(),
            "built interval volume"
        );
        Ok(IntervalVolume {
            rows,
            columns,
            levels,
            data: Arc::from(data),
        })
    }

    /// Fill every bin with `loader(row_key, column_key, level_key)` and build.
    ///
    /// Overwrites anything previously set or added.
    pub fn build_with<F>(&mut self, mut loader: F) -> core::result::Result<IntervalVolume<T>, DataError>
    where
        F: FnMut(T, T, T) -> T,
    {
        let (rows, columns, levels, data) = self.ready()?;
        let mut stacks = data.chunks_exact_mut(levels.len());
        for &r in rows.keys() {
            for &c in columns.keys() {
                let Some(stack) = stacks.next() else { break };
                for (cell, &l) in stack.iter_mut().zip(levels.keys()) {
                    *cell = loader(r, c, l);
                }
            }
        }
        self.build()
    }
}

// Row-major offset of `(ri, ci, li)`, levels innermost.
#[inline]
fn flat<T: Float>(columns: &Axis<T>, levels: &Axis<T>, ri: usize, ci: usize, li: usize) -> usize {
    (ri * columns.len() + ci) * levels.len() + li
}

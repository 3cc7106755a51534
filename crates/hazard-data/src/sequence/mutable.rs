//! Mutable xy-sequences.
//!
//! ## Purpose
//!
//! [`MutableXySequence`] extends the read-only [`XyView`] interface with
//! in-place y-value mutation: setting, element-wise arithmetic, complement,
//! clearing and arbitrary transforms. Hazard-curve aggregation accumulates
//! into these sequences.
//!
//! ## Design notes
//!
//! * **Owned y-values**: y-values live in a `Vec<T>` owned by the sequence.
//!   x-values remain a shared `Arc<[T]>` and are never mutated.
//! * **Chaining**: Mutators return `&mut Self` (or `Result<&mut Self, _>` when
//!   they can fail) so calls can be chained.
//! * **Exclusive access**: Mutation requires `&mut self`; sharing across
//!   threads must go through an immutable copy.
//!
//! ## Invariants
//!
//! * Sequence operands of `add` and `multiply` must have the same x-values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{sync::Arc, vec::Vec};
#[cfg(feature = "std")]
use std::{sync::Arc, vec::Vec};

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::ops;
use crate::primitives::errors::DataError;
use crate::primitives::validator::Validator;
use crate::primitives::window::Window;
use crate::sequence::point::{PointsMut, XyPoint};
use crate::sequence::view::{sealed::Sealed, XyView};
use crate::sequence::xy::XySequence;

// ============================================================================
// Mutable Sequence
// ============================================================================

/// A sequence of xy-value pairs with mutable y-values.
///
/// Not intended for concurrent mutation; use [`XySequence`] for values that
/// are shared across threads.
#[derive(Debug, Clone)]
pub struct MutableXySequence<T> {
    xs: Arc<[T]>,
    ys: Vec<T>,
}

impl<T: Float> MutableXySequence<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a new sequence from copies of the supplied arrays.
    ///
    /// Fails if `xs` is empty, if the lengths differ, or if `xs` does not
    /// increase strictly.
    pub fn create(xs: &[T], ys: &[T]) -> core::result::Result<Self, DataError> {
        Validator::validate_sequence(xs, ys)?;
        Ok(Self {
            xs: Arc::from(xs),
            ys: ys.to_vec(),
        })
    }

    /// Create a new sequence over `xs` with every y-value zero.
    pub fn zeros(xs: &[T]) -> core::result::Result<Self, DataError> {
        let ys = vec![T::zero(); xs.len()];
        Self::create(xs, &ys)
    }

    /// Create a mutable copy of any sequence, sharing its x-values.
    pub fn copy_of<S: XyView<T> + ?Sized>(sequence: &S) -> Self {
        Self {
            xs: Arc::clone(sequence.key_array()),
            ys: sequence.y_slice().to_vec(),
        }
    }

    /// Create a zero-valued sequence sharing the x-values of `sequence`.
    pub fn copy_of_cleared<S: XyView<T> + ?Sized>(sequence: &S) -> Self {
        let xs = Arc::clone(sequence.key_array());
        let ys = vec![T::zero(); xs.len()];
        Self { xs, ys }
    }

    /// Freeze this sequence without copying its x-values.
    pub fn into_immutable(self) -> XySequence<T> {
        XySequence::from_parts(self.xs, Window::from(self.ys))
    }

    // ========================================================================
    // Point Access
    // ========================================================================

    /// The first point, writable.
    #[inline]
    pub fn min_mut(&mut self) -> XyPoint<'_, T> {
        XyPoint::writable(self.xs[0], &mut self.ys[0])
    }

    /// The last point, writable.
    #[inline]
    pub fn max_mut(&mut self) -> XyPoint<'_, T> {
        let last = self.ys.len() - 1;
        XyPoint::writable(self.xs[last], &mut self.ys[last])
    }

    /// Writable points, ascending in x.
    #[inline]
    pub fn points_mut(&mut self) -> PointsMut<'_, T> {
        PointsMut::new(&self.xs, &mut self.ys)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Set the y-value at `index`.
    pub fn set(&mut self, index: usize, value: T) -> core::result::Result<&mut Self, DataError> {
        let i = Validator::validate_index(index, self.ys.len())?;
        self.ys[i] = value;
        Ok(self)
    }

    /// Add `term` to every y-value.
    pub fn add_scalar(&mut self, term: T) -> &mut Self {
        ops::add_scalar(term, &mut self.ys);
        self
    }

    /// Add `values` to the y-values element-wise.
    pub fn add_values(&mut self, values: &[T]) -> core::result::Result<&mut Self, DataError> {
        ops::checked_add_assign(&mut self.ys, values)?;
        Ok(self)
    }

    /// Add the y-values of `sequence`, which must share these x-values.
    pub fn add<S: XyView<T> + ?Sized>(
        &mut self,
        sequence: &S,
    ) -> core::result::Result<&mut Self, DataError> {
        self.validate_operand(sequence)?;
        ops::add_assign(&mut self.ys, sequence.y_slice());
        Ok(self)
    }

    /// Multiply every y-value by `scale`.
    pub fn multiply_scalar(&mut self, scale: T) -> &mut Self {
        ops::scale(scale, &mut self.ys);
        self
    }

    /// Multiply by the y-values of `sequence`, which must share these x-values.
    pub fn multiply<S: XyView<T> + ?Sized>(
        &mut self,
        sequence: &S,
    ) -> core::result::Result<&mut Self, DataError> {
        self.validate_operand(sequence)?;
        ops::mul_assign(&mut self.ys, sequence.y_slice());
        Ok(self)
    }

    /// Replace every y-value with `1 - y`; intended for probabilities.
    pub fn complement(&mut self) -> &mut Self {
        ops::complement(&mut self.ys);
        self
    }

    /// Set every y-value to zero.
    pub fn clear(&mut self) -> &mut Self {
        self.ys.fill(T::zero());
        self
    }

    /// Apply `function` to every y-value in place.
    pub fn transform<F>(&mut self, mut function: F) -> &mut Self
    where
        F: FnMut(T) -> T,
    {
        for y in self.ys.iter_mut() {
            *y = function(*y);
        }
        self
    }

    fn validate_operand<S>(&self, other: &S) -> core::result::Result<(), DataError>
    where
        S: XyView<T> + ?Sized,
    {
        if !self.has_same_x(other) {
            return Err(DataError::MismatchedKeys("sequence x-values differ"));
        }
        Ok(())
    }
}

impl<T: Float> Sealed<T> for MutableXySequence<T> {
    #[inline]
    fn key_array(&self) -> &Arc<[T]> {
        &self.xs
    }

    #[inline]
    fn y_slice(&self) -> &[T] {
        &self.ys
    }

    fn to_immutable(&self) -> XySequence<T> {
        XySequence::from_parts(Arc::clone(&self.xs), Window::from(self.ys.clone()))
    }
}

impl<T: Float> XyView<T> for MutableXySequence<T> {}

// ============================================================================
// Equality
// ============================================================================

impl<T: Float> PartialEq for MutableXySequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.has_same_x(other) && self.ys == other.ys
    }
}

impl<T: Float> PartialEq<XySequence<T>> for MutableXySequence<T> {
    fn eq(&self, other: &XySequence<T>) -> bool {
        other == self
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for MutableXySequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "MutableXySequence:")?;
        for p in self.points() {
            write!(f, "\n{}", p)?;
        }
        Ok(())
    }
}

//! Immutable xy-sequences.
//!
//! ## Purpose
//!
//! [`XySequence`] is an ordered sequence of `(x, y)` pairs, ascending in x,
//! whose values never change after construction. It is the form in which
//! interval containers hand out their rows, columns and values.
//!
//! ## Design notes
//!
//! * **Shared storage**: x-values are an `Arc<[T]>` and y-values a [`Window`]
//!   into another `Arc<[T]>`. Cloning, copying and taking table rows never
//!   duplicates either array.
//! * **Copy on entry**: [`XySequence::create`] copies caller data, so no
//!   caller keeps a writable handle to a sequence's storage.
//!
//! ## Invariants
//!
//! * Non-empty, equal lengths, strictly increasing x-values.
//!
//! ## Non-goals
//!
//! * In-place mutation (use [`MutableXySequence`]).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{sync::Arc, vec::Vec};
#[cfg(feature = "std")]
use std::{sync::Arc, vec::Vec};

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DataError;
use crate::primitives::validator::Validator;
use crate::primitives::window::Window;
use crate::sequence::mutable::MutableXySequence;
use crate::sequence::view::{sealed::Sealed, XyView};

// ============================================================================
// Immutable Sequence
// ============================================================================

/// An immutable sequence of xy-value pairs, ascending in x.
#[derive(Debug, Clone)]
pub struct XySequence<T> {
    xs: Arc<[T]>,
    ys: Window<T>,
}

impl<T: Float> XySequence<T> {
    /// Create a new sequence from copies of the supplied arrays.
    ///
    /// Fails if `xs` is empty, if the lengths differ, or if `xs` does not
    /// increase strictly.
    pub fn create(xs: &[T], ys: &[T]) -> core::result::Result<Self, DataError> {
        Validator::validate_sequence(xs, ys)?;
        Ok(Self::from_vecs(xs.to_vec(), ys.to_vec()))
    }

    /// Create an immutable copy of any sequence.
    ///
    /// An `XySequence` is returned sharing all of its storage; a mutable
    /// source shares its x-values and has its y-values copied.
    #[inline]
    pub fn copy_of<S: XyView<T> + ?Sized>(sequence: &S) -> Self {
        sequence.to_immutable()
    }

    /// Create a mutable copy that shares this sequence's x-values.
    #[inline]
    pub fn to_mutable(&self) -> MutableXySequence<T> {
        MutableXySequence::copy_of(self)
    }

    /// Check whether both sequences view the very same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.xs, &other.xs) && self.ys.ptr_eq(&other.ys)
    }

    // Unchecked; callers guarantee the sequence invariants.
    #[inline]
    pub(crate) fn from_parts(xs: Arc<[T]>, ys: Window<T>) -> Self {
        debug_assert_eq!(xs.len(), ys.len());
        Self { xs, ys }
    }

    #[inline]
    pub(crate) fn from_vecs(xs: Vec<T>, ys: Vec<T>) -> Self {
        Self::from_parts(Arc::from(xs), Window::from(ys))
    }
}

impl<T: Float> Sealed<T> for XySequence<T> {
    #[inline]
    fn key_array(&self) -> &Arc<[T]> {
        &self.xs
    }

    #[inline]
    fn y_slice(&self) -> &[T] {
        &self.ys
    }

    #[inline]
    fn to_immutable(&self) -> XySequence<T> {
        self.clone()
    }
}

impl<T: Float> XyView<T> for XySequence<T> {}

// ============================================================================
// Equality
// ============================================================================

impl<T: Float> PartialEq for XySequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || (self.has_same_x(other) && self.y_values() == other.y_values())
    }
}

impl<T: Float> PartialEq<MutableXySequence<T>> for XySequence<T> {
    fn eq(&self, other: &MutableXySequence<T>) -> bool {
        self.has_same_x(other) && self.y_values() == other.y_values()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for XySequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "XySequence:")?;
        for p in self.points() {
            write!(f, "\n{}", p)?;
        }
        Ok(())
    }
}

//! Read-only interface shared by both sequence variants.
//!
//! ## Purpose
//!
//! [`XyView`] is the common, read-only face of [`XySequence`] and
//! [`MutableXySequence`]. Everything that only reads a sequence (indexing,
//! trimming, structural comparison) is written once here.
//!
//! ## Design notes
//!
//! * **Sealed**: The trait cannot be implemented outside this crate, so the
//!   set of variants is closed.
//! * **Key identity**: The private supertrait exposes the x-value storage as
//!   an `Arc<[T]>`, which lets operands be compared by pointer before values.
//!
//! ## Invariants
//!
//! * `x_values().len() == y_values().len() == size() > 0`.
//! * x-values increase strictly.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::ops;
use crate::primitives::errors::DataError;
use crate::primitives::validator::Validator;
use crate::sequence::point::{Points, XyPoint};
use crate::sequence::xy::XySequence;

#[cfg(doc)]
use crate::sequence::mutable::MutableXySequence;

pub(crate) mod sealed {
    use super::*;

    /// Storage access for the closed set of sequence variants.
    pub trait Sealed<T> {
        /// Shared x-value storage; compared by identity before value.
        fn key_array(&self) -> &Arc<[T]>;

        /// Current y-values.
        fn y_slice(&self) -> &[T];

        /// Immutable copy, sharing as much storage as the variant allows.
        fn to_immutable(&self) -> XySequence<T>;
    }
}

/// Read-only operations common to all xy-sequences.
pub trait XyView<T: Float>: sealed::Sealed<T> {
    /// Number of points.
    #[inline]
    fn size(&self) -> usize {
        self.key_array().len()
    }

    /// The x-value at `index`.
    fn x(&self, index: usize) -> Result<T, DataError> {
        let xs = self.key_array();
        Validator::validate_index(index, xs.len()).map(|i| xs[i])
    }

    /// The y-value at `index`.
    fn y(&self, index: usize) -> Result<T, DataError> {
        let ys = self.y_slice();
        Validator::validate_index(index, ys.len()).map(|i| ys[i])
    }

    /// All x-values, ascending.
    #[inline]
    fn x_values(&self) -> &[T] {
        self.key_array()
    }

    /// All y-values, in x order.
    #[inline]
    fn y_values(&self) -> &[T] {
        self.y_slice()
    }

    /// The first point.
    #[inline]
    fn min(&self) -> XyPoint<'_, T> {
        XyPoint::fixed(self.key_array()[0], self.y_slice()[0])
    }

    /// The last point.
    #[inline]
    fn max(&self) -> XyPoint<'_, T> {
        let last = self.size() - 1;
        XyPoint::fixed(self.key_array()[last], self.y_slice()[last])
    }

    /// Read-only points, ascending in x.
    #[inline]
    fn points(&self) -> Points<'_, T> {
        Points::new(self.key_array(), self.y_slice())
    }

    /// Whether every y-value is exactly zero.
    #[inline]
    fn is_clear(&self) -> bool {
        ops::is_zero_valued(self.y_slice())
    }

    /// A new sequence without leading and trailing zero-valued points.
    ///
    /// Interior zeros are kept. Fails with [`DataError::ClearSequence`] when
    /// every y-value is zero, as empty sequences are not permitted.
    fn trim(&self) -> Result<XySequence<T>, DataError> {
        let ys = self.y_slice();
        let (first, last) = match (ops::first_non_zero(ys), ops::last_non_zero(ys)) {
            (Some(first), Some(last)) => (first, last + 1),
            _ => return Err(DataError::ClearSequence),
        };
        let xs = &self.key_array()[first..last];
        Ok(XySequence::from_vecs(xs.to_vec(), ys[first..last].to_vec()))
    }

    /// Whether `other` has the same x-values as this sequence.
    ///
    /// Sequences sharing x-value storage compare in constant time.
    #[inline]
    fn has_same_x<S: XyView<T> + ?Sized>(&self, other: &S) -> bool {
        ops::same_keys(self.key_array(), other.key_array())
    }
}

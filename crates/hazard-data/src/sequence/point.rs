//! Point views into xy-sequences.
//!
//! An [`XyPoint`] never owns storage. A read-only point carries a copy of its
//! y-value; a writable point borrows the y-slot of a mutable sequence. The
//! capability is checked at the point itself: [`XyPoint::set`] fails on a
//! read-only point.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use core::iter::{FusedIterator, Zip};
use core::slice::{Iter, IterMut};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DataError;

// ============================================================================
// Point
// ============================================================================

#[derive(Debug)]
enum Slot<'a, T> {
    Fixed(T),
    Writable(&'a mut T),
}

/// A single `(x, y)` pair view into a sequence.
#[derive(Debug)]
pub struct XyPoint<'a, T> {
    x: T,
    y: Slot<'a, T>,
}

impl<'a, T: Float> XyPoint<'a, T> {
    #[inline]
    pub(crate) fn fixed(x: T, y: T) -> Self {
        Self {
            x,
            y: Slot::Fixed(y),
        }
    }

    #[inline]
    pub(crate) fn writable(x: T, y: &'a mut T) -> Self {
        Self {
            x,
            y: Slot::Writable(y),
        }
    }

    /// The x-value of this point.
    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    /// The y-value of this point.
    #[inline]
    pub fn y(&self) -> T {
        match &self.y {
            Slot::Fixed(y) => *y,
            Slot::Writable(y) => **y,
        }
    }

    /// Whether [`set`](Self::set) is permitted.
    #[inline]
    pub fn is_mutable(&self) -> bool {
        matches!(self.y, Slot::Writable(_))
    }

    /// Set the y-value of this point in its parent sequence.
    ///
    /// Fails with [`DataError::Immutable`] for points of an immutable sequence.
    pub fn set(&mut self, y: T) -> core::result::Result<(), DataError> {
        match &mut self.y {
            Slot::Writable(slot) => {
                **slot = y;
                Ok(())
            }
            Slot::Fixed(_) => Err(DataError::Immutable),
        }
    }
}

impl<T: Float + Display> Display for XyPoint<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "XyPoint: [{}, {}]", self.x, self.y())
    }
}

// ============================================================================
// Iterators
// ============================================================================

/// Iterator over read-only points, ascending in x.
#[derive(Debug, Clone)]
pub struct Points<'a, T> {
    inner: Zip<Iter<'a, T>, Iter<'a, T>>,
}

impl<'a, T> Points<'a, T> {
    #[inline]
    pub(crate) fn new(xs: &'a [T], ys: &'a [T]) -> Self {
        Self {
            inner: xs.iter().zip(ys.iter()),
        }
    }
}

impl<'a, T: Float> Iterator for Points<'a, T> {
    type Item = XyPoint<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&x, &y)| XyPoint::fixed(x, y))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Float> ExactSizeIterator for Points<'_, T> {}
impl<T: Float> FusedIterator for Points<'_, T> {}

/// Iterator over writable points of a mutable sequence, ascending in x.
#[derive(Debug)]
pub struct PointsMut<'a, T> {
    inner: Zip<Iter<'a, T>, IterMut<'a, T>>,
}

impl<'a, T> PointsMut<'a, T> {
    #[inline]
    pub(crate) fn new(xs: &'a [T], ys: &'a mut [T]) -> Self {
        Self {
            inner: xs.iter().zip(ys.iter_mut()),
        }
    }
}

impl<'a, T: Float> Iterator for PointsMut<'a, T> {
    type Item = XyPoint<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&x, y)| XyPoint::writable(x, y))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Float> ExactSizeIterator for PointsMut<'_, T> {}
impl<T: Float> FusedIterator for PointsMut<'_, T> {}

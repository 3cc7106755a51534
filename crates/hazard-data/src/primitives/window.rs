//! Shared, read-only windows over reference-counted storage.
//!
//! A [`Window`] lets a table row or volume column expose its slice of the
//! container's backing array without copying it. Many windows may share the
//! same `Arc<[T]>`; none of them can write to it.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{sync::Arc, vec::Vec};
#[cfg(feature = "std")]
use std::sync::Arc;

// External dependencies
use core::ops::Deref;

/// Half-open window `[start, start + len)` into shared storage.
#[derive(Debug, Clone)]
pub struct Window<T> {
    data: Arc<[T]>,
    start: usize,
    len: usize,
}

impl<T> Window<T> {
    // Window covering all of `data`.
    #[inline]
    pub fn full(data: Arc<[T]>) -> Self {
        let len = data.len();
        Self {
            data,
            start: 0,
            len,
        }
    }

    // Window over `data[start..start + len]`.
    #[inline]
    pub fn new(data: Arc<[T]>, start: usize, len: usize) -> Self {
        debug_assert!(start + len <= data.len(), "window exceeds storage");
        Self { data, start, len }
    }

    // Check whether two windows view the same region of the same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data) && self.start == other.start && self.len == other.len
    }

    // Get the visible values.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[self.start..self.start + self.len]
    }
}

impl<T> Deref for Window<T> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> From<Vec<T>> for Window<T> {
    fn from(v: Vec<T>) -> Self {
        Self::full(Arc::from(v))
    }
}

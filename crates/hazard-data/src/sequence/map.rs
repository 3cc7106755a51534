//! Keyed accumulation of sequences.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::{btree_map::Entry, BTreeMap};
#[cfg(feature = "std")]
use std::collections::{btree_map::Entry, BTreeMap};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DataError;
use crate::sequence::mutable::MutableXySequence;
use crate::sequence::view::XyView;

/// Add `sequence` to the entry for `key`, inserting a mutable copy if absent.
///
/// Fails with [`DataError::MismatchedKeys`] if an existing entry has
/// different x-values; the map is left unchanged in that case.
pub fn add_to_map<K, T, S>(
    key: K,
    map: &mut BTreeMap<K, MutableXySequence<T>>,
    sequence: &S,
) -> Result<(), DataError>
where
    K: Ord,
    T: Float,
    S: XyView<T> + ?Sized,
{
    match map.entry(key) {
        Entry::Occupied(mut entry) => {
            entry.get_mut().add(sequence)?;
        }
        Entry::Vacant(entry) => {
            entry.insert(MutableXySequence::copy_of(sequence));
        }
    }
    Ok(())
}

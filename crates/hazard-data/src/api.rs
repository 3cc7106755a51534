//! High-level API for interval-indexed data.
//!
//! ## Purpose
//!
//! This module is the user-facing surface of the crate. It gathers the
//! sequence types, the interval containers and their builders, and the
//! key utilities behind a single set of names.
//!
//! ## Key concepts
//!
//! * **Sequences**: [`XySequence`] is immutable and may share storage with
//!   the container it was taken from; [`MutableXySequence`] owns its
//!   y-values. Both implement [`XyView`].
//! * **Containers**: [`IntervalArray`], [`IntervalTable`] and
//!   [`IntervalVolume`] are immutable once built.
//! * **Configuration Flow**:
//!   1. Create a builder via `IntervalTable::builder()` (or `copy_of`,
//!      `from_model`).
//!   2. Define every dimension (`.rows()`, `.columns()`, ...).
//!   3. Add data (`.set()`, `.add()`, `.add_row()`, ...).
//!   4. Call `.build()` exactly once.

// Publicly re-exported types
pub use crate::interval::array::{IntervalArray, IntervalArrayBuilder};
pub use crate::interval::axis::Axis;
pub use crate::interval::state::BuilderState;
pub use crate::interval::table::{IntervalTable, IntervalTableBuilder};
pub use crate::interval::volume::{IntervalVolume, IntervalVolumeBuilder};
pub use crate::math::keys::{index_of, keys, KEY_PRECISION};
pub use crate::primitives::errors::{DataError, Dimension, ErrorKind};
pub use crate::sequence::map::add_to_map;
pub use crate::sequence::mutable::MutableXySequence;
pub use crate::sequence::point::{Points, PointsMut, XyPoint};
pub use crate::sequence::view::XyView;
pub use crate::sequence::xy::XySequence;

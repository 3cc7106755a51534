//! Layer 4: Interval
//!
//! # Purpose
//!
//! This layer provides immutable containers of data binned by uniformly
//! spaced intervals, together with their single-use builders:
//! - [`array::IntervalArray`]: values by row
//! - [`table::IntervalTable`]: values by row and column
//! - [`volume::IntervalVolume`]: values by row, column and level
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Interval ← You are here
//!   ↓
//! Layer 3: Sequence
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Per-dimension bin metadata.
pub mod axis;

/// Builder lifecycle.
pub mod state;

/// Text rendering.
pub mod format;

/// One-dimensional containers.
pub mod array;

/// Two-dimensional containers.
pub mod table;

/// Three-dimensional containers.
pub mod volume;

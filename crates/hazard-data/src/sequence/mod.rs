//! Layer 3: Sequence
//!
//! # Purpose
//!
//! This layer provides ordered xy-sequences, the substrate for every
//! interval container:
//! - [`xy::XySequence`]: immutable, storage-sharing sequences
//! - [`mutable::MutableXySequence`]: sequences with mutable y-values
//! - [`view::XyView`]: the sealed read-only interface both implement
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Interval
//!   ↓
//! Layer 3: Sequence ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Point views and iterators.
pub mod point;

/// Shared read-only interface.
pub mod view;

/// Immutable sequences.
pub mod xy;

/// Mutable sequences.
pub mod mutable;

/// Keyed accumulation.
pub mod map;

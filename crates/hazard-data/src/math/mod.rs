//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numeric functions used throughout the crate:
//! - Bin-center key generation and value-to-index conversion
//! - Element-wise arithmetic and scans over flat arrays
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Interval
//!   ↓
//! Layer 3: Sequence
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Key generation and indexing.
pub mod keys;

/// Flat-array arithmetic.
pub mod ops;

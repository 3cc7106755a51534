//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type, input validation and shared storage
//! windows used throughout the crate. It has zero internal dependencies
//! outside itself.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Boundary validation.
pub mod validator;

/// Shared read-only storage windows.
pub mod window;

//! Error types for sequence and interval-data operations.
//!
//! ## Purpose
//!
//! This module defines every error condition raised by the crate, from
//! sequence construction through builder lifecycle violations.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (lengths, indices, bounds).
//! * **Deferred**: Builder dimension errors are stored and surfaced by the next fallible call.
//! * **No-std**: Supports `no_std` environments; messages are rendered through `core::fmt`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! Every variant belongs to one [`ErrorKind`]:
//!
//! 1. **Argument**: Invalid construction inputs or incompatible operands.
//! 2. **Index**: An index or value falls outside a sequence or dimension.
//! 3. **State**: A builder or sequence is not in a state that permits the call.
//! 4. **Unsupported**: Mutation attempted through a read-only view.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric bounds are reported as `f64` regardless of the element type.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Dimension Labels
// ============================================================================

/// A named dimension of an interval container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// First (outermost) dimension.
    Row,

    /// Second dimension.
    Column,

    /// Third (innermost) dimension of a volume.
    Level,
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Row => write!(f, "Row"),
            Self::Column => write!(f, "Column"),
            Self::Level => write!(f, "Level"),
        }
    }
}

// ============================================================================
// Error Kind
// ============================================================================

/// Broad classification of a [`DataError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid construction input or structurally incompatible operand.
    Argument,

    /// Index or value outside the valid range.
    Index,

    /// Operation invoked in the wrong lifecycle state.
    State,

    /// Mutation attempted through an immutable view.
    Unsupported,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sequence and interval-data operations.
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    /// Sequences require at least one point.
    EmptyInput,

    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array (or receiver).
        x_len: usize,
        /// Number of elements in the `y` array (or operand).
        y_len: usize,
    },

    /// x-values must increase strictly; `index` is the first offending position.
    NotIncreasing {
        /// Position of the value that is not greater than its predecessor.
        index: usize,
    },

    /// A value was NaN or infinite where a finite value is required.
    NonFiniteValue(f64),

    /// Bin width must be positive, finite and no wider than the range.
    InvalidDelta(f64),

    /// The upper bin edge must exceed the lower bin edge.
    InvalidRange {
        /// Lower edge of the lowermost bin.
        min: f64,
        /// Upper edge of the uppermost bin.
        max: f64,
    },

    /// Operands do not share the same keys.
    MismatchedKeys(&'static str),

    /// Index lies outside `[0, size)`.
    IndexOutOfBounds {
        /// The index requested.
        index: usize,
        /// The number of valid positions.
        size: usize,
    },

    /// Value maps to a bin outside `[0, size)`.
    ValueOutOfRange {
        /// The value requested.
        value: f64,
        /// The number of bins.
        size: usize,
    },

    /// Supplied values run past the end of a row or column.
    Overrun {
        /// Starting position of the write.
        offset: usize,
        /// Number of values supplied.
        len: usize,
        /// Number of slots available.
        size: usize,
    },

    /// A dimension has not yet been defined on a builder.
    DimensionUnset(Dimension),

    /// All dimensions of a builder have already been defined.
    AlreadyInitialized,

    /// A builder may be built only once.
    AlreadyBuilt,

    /// Trimming an all-zero sequence would leave it empty.
    ClearSequence,

    /// Mutation through a read-only point view.
    Immutable,
}

impl DataError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput
            | Self::MismatchedInputs { .. }
            | Self::NotIncreasing { .. }
            | Self::NonFiniteValue(_)
            | Self::InvalidDelta(_)
            | Self::InvalidRange { .. }
            | Self::MismatchedKeys(_) => ErrorKind::Argument,
            Self::IndexOutOfBounds { .. } | Self::ValueOutOfRange { .. } | Self::Overrun { .. } => {
                ErrorKind::Index
            }
            Self::DimensionUnset(_)
            | Self::AlreadyInitialized
            | Self::AlreadyBuilt
            | Self::ClearSequence => ErrorKind::State,
            Self::Immutable => ErrorKind::Unsupported,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "x-values may not be empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} values, y has {y_len}")
            }
            Self::NotIncreasing { index } => {
                write!(f, "x-values do not increase monotonically at index {index}")
            }
            Self::NonFiniteValue(v) => write!(f, "Invalid numeric value: {v}"),
            Self::InvalidDelta(delta) => {
                write!(f, "Invalid bin width: {delta} (must be > 0 and <= max - min)")
            }
            Self::InvalidRange { min, max } => {
                write!(f, "Invalid range: max {max} must be greater than min {min}")
            }
            Self::MismatchedKeys(what) => write!(f, "Keys do not match: {what}"),
            Self::IndexOutOfBounds { index, size } => {
                write!(f, "Index {index} out of range [0, {size})")
            }
            Self::ValueOutOfRange { value, size } => {
                write!(f, "Value {value} maps outside bin range [0, {size})")
            }
            Self::Overrun { offset, len, size } => {
                write!(
                    f,
                    "Supplied values overrun end of data: {len} values from {offset} exceed size {size}"
                )
            }
            Self::DimensionUnset(dim) => {
                write!(f, "{dim} data have not yet been fully specified")
            }
            Self::AlreadyInitialized => write!(f, "Builder has already been initialized"),
            Self::AlreadyBuilt => write!(f, "This builder has already been used"),
            Self::ClearSequence => write!(f, "trim() not permitted for 'clear' sequences"),
            Self::Immutable => write!(f, "Point is read-only; sequence is immutable"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for DataError {}

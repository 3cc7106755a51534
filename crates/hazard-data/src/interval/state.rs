//! Builder lifecycle shared by all interval builders.
//!
//! ## Purpose
//!
//! Every interval builder moves through the same states:
//!
//! ```text
//! Unconfigured --(all dimensions defined)--> Configured --(build)--> Built
//! ```
//!
//! This module holds that state and the deferred error raised while
//! defining dimensions.
//!
//! ## Design notes
//!
//! * **Deferred errors**: Dimension definitions are fluent and cannot fail
//!   in place. The first error is stored and reported by the next fallible
//!   call, as with duplicate parameters in a fluent configuration builder.
//! * **Checked entry points**: Every data method and `build()` call checks
//!   the lifecycle before touching data.
//!
//! ## Invariants
//!
//! * `Built` is terminal.
//! * A builder holds a backing array if and only if it is `Configured`.

// Internal dependencies
use crate::primitives::errors::DataError;

// ============================================================================
// Builder State
// ============================================================================

/// Lifecycle state of an interval builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderState {
    /// One or more dimensions are undefined.
    #[default]
    Unconfigured,

    /// All dimensions are defined and the backing array is allocated.
    Configured,

    /// `build()` has been called; the builder is spent.
    Built,
}

// ============================================================================
// Lifecycle
// ============================================================================

#[derive(Debug, Clone, Default)]
pub(crate) struct Lifecycle {
    state: BuilderState,
    deferred_error: Option<DataError>,
}

impl Lifecycle {
    // Lifecycle of a builder derived from an existing container.
    #[inline]
    pub fn configured() -> Self {
        Self {
            state: BuilderState::Configured,
            deferred_error: None,
        }
    }

    #[inline]
    pub fn state(&self) -> BuilderState {
        self.state
    }

    // Record an error unless one is already pending.
    #[inline]
    pub fn defer(&mut self, error: DataError) {
        if self.deferred_error.is_none() {
            self.deferred_error = Some(error);
        }
    }

    // Whether a dimension may still be defined; defers the reason if not.
    pub fn may_define(&mut self) -> bool {
        match self.state {
            BuilderState::Unconfigured => true,
            BuilderState::Configured => {
                self.defer(DataError::AlreadyInitialized);
                false
            }
            BuilderState::Built => {
                self.defer(DataError::AlreadyBuilt);
                false
            }
        }
    }

    #[inline]
    pub fn configure(&mut self) {
        self.state = BuilderState::Configured;
    }

    #[inline]
    pub fn finish(&mut self) {
        self.state = BuilderState::Built;
    }

    // Fail with any pending error, or if the builder is spent.
    pub fn check(&self) -> Result<(), DataError> {
        if let Some(err) = &self.deferred_error {
            return Err(err.clone());
        }
        if self.state == BuilderState::Built {
            return Err(DataError::AlreadyBuilt);
        }
        Ok(())
    }
}

//! # hazard-data: Interval-Indexed Numeric Data for Seismic Hazard
//!
//! Immutable, shareable containers for hazard curves and magnitude-distance
//! distributions, generic over `f32` and `f64`.
//!
//! ## What is interval data?
//!
//! Many hazard quantities are accumulated into uniformly spaced bins: rates
//! by magnitude, by magnitude and distance, or by magnitude, distance and
//! epsilon. Each dimension is defined by its outer bin edges and a bin width;
//! bin centers serve as keys and any value within a bin resolves to it.
//!
//! ## Quick Start
//!
//! ### Building a Table
//!
//! ```rust
//! use hazard_data::prelude::*;
//!
//! // Rows [0, 4) in bins of 2, columns [0, 2) in bins of 1
//! let mut builder = IntervalTable::builder()
//!     .rows(0.0, 4.0, 2.0)
//!     .columns(0.0, 2.0, 1.0);
//!
//! builder.add_row(1.0, &[1.0, 2.0])?;
//! let table = builder.build()?;
//!
//! assert_eq!(table.rows(), &[1.0, 3.0]);
//! assert_eq!(table.columns(), &[0.5, 1.5]);
//! assert_eq!(table.get(1.0, 0.5)?, 1.0);
//! assert_eq!(table.get_at(0, 1)?, 2.0);
//!
//! // Sum across columns
//! let array = table.collapse();
//! assert_eq!(array.get(1.0)?, 3.0);
//!
//! println!("{}", table);
//! # Result::<(), DataError>::Ok(())
//! ```
//!
//! ```text
//!           [    0.50,     1.50]
//! [   1.00] [ 1.00e+00,  2.00e+00]
//! [   3.00] [ 0.00e+00,  0.00e+00]
//! ```
//!
//! ### Sequences
//!
//! ```rust
//! use hazard_data::prelude::*;
//!
//! let xs: [f64; 3] = [0.0, 1.0, 2.0];
//! let mut curve = MutableXySequence::create(&xs, &[0.1, 0.2, 0.3])?;
//! curve.multiply_scalar(2.0).complement();
//!
//! let fixed = curve.into_immutable();
//! assert_eq!(fixed.size(), 3);
//! assert!((fixed.y(0)? - 0.8).abs() < 1e-12);
//! # Result::<(), DataError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible operation returns `Result<_, DataError>`. Errors carry the
//! offending values and can be classified with [`DataError::kind`]:
//!
//! ```rust
//! use hazard_data::prelude::*;
//!
//! let mut builder = IntervalArray::<f64>::builder();
//!
//! // No rows defined yet
//! match builder.add(1.0, 1.0) {
//!     Err(e) => assert_eq!(e.kind(), ErrorKind::State),
//!     Ok(_) => unreachable!(),
//! }
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std + alloc`. Disable default features:
//!
//! ```toml
//! [dependencies]
//! hazard-data = { version = "0.3", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, validation and shared storage.
mod primitives;

// Layer 2: Math - key generation and flat-array arithmetic.
mod math;

// Layer 3: Sequence - xy-sequences and their shared interface.
mod sequence;

// Layer 4: Interval - binned containers and builders.
mod interval;

// High-level API for interval data.
mod api;

// Standard hazard-data prelude.
pub mod prelude {
    pub use crate::api::{
        add_to_map, index_of, keys, Axis, BuilderState, DataError, Dimension, ErrorKind,
        IntervalArray, IntervalArrayBuilder, IntervalTable, IntervalTableBuilder, IntervalVolume,
        IntervalVolumeBuilder, MutableXySequence, XyPoint, XySequence, XyView, KEY_PRECISION,
    };
}

pub use api::*;

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod sequence {
        pub use crate::sequence::*;
    }
    pub mod interval {
        pub use crate::interval::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}

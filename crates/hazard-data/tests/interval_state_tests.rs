//! Tests for the builder lifecycle shared by all interval builders.
//!
//! These tests verify the `Unconfigured -> Configured -> Built` state machine:
//! - Allocation once every dimension is defined
//! - Deferred reporting of dimension errors
//! - Rejection of data calls on incomplete builders
//! - Single use of `build()`
//!
//! ## Test Organization
//!
//! 1. **States** - Transitions as dimensions are defined
//! 2. **Incomplete Builders** - Missing dimensions
//! 3. **Deferred Errors** - Bad or repeated definitions
//! 4. **Single Use** - Second builds and post-build calls

use hazard_data::prelude::*;

// ============================================================================
// State Tests
// ============================================================================

/// Test transitions of a table builder.
#[test]
fn test_table_states() {
    let builder = IntervalTable::<f64>::builder();
    assert_eq!(builder.state(), BuilderState::Unconfigured);

    let builder = builder.rows(0.0, 1.0, 0.5);
    assert_eq!(builder.state(), BuilderState::Unconfigured);

    let mut builder = builder.columns(0.0, 1.0, 0.5);
    assert_eq!(builder.state(), BuilderState::Configured);

    builder.build().unwrap();
    assert_eq!(builder.state(), BuilderState::Built);
}

/// Test that dimensions may be defined in any order.
#[test]
fn test_volume_any_order() {
    let mut builder = IntervalVolume::builder()
        .levels(0.0, 1.0, 1.0)
        .rows(0.0, 2.0, 1.0)
        .columns(0.0, 3.0, 1.0);
    assert_eq!(builder.state(), BuilderState::Configured);
    let volume = builder.build().unwrap();
    assert_eq!(volume.rows().len(), 2);
    assert_eq!(volume.columns().len(), 3);
    assert_eq!(volume.levels().len(), 1);
}

/// Test that a dimension may be redefined before configuration completes.
#[test]
fn test_redefine_before_configured() {
    let mut builder = IntervalTable::builder()
        .rows(0.0, 1.0, 0.5)
        .rows(0.0, 3.0, 1.0)
        .columns(0.0, 1.0, 1.0);
    let table = builder.build().unwrap();
    assert_eq!(table.rows(), &[0.5, 1.5, 2.5]);
}

// ============================================================================
// Incomplete Builder Tests
// ============================================================================

/// Test that data calls name the first missing dimension.
#[test]
fn test_missing_dimensions() {
    let mut array = IntervalArray::<f64>::builder();
    assert_eq!(
        array.set(1.0, 1.0).unwrap_err(),
        DataError::DimensionUnset(Dimension::Row)
    );

    let mut table = IntervalTable::builder().rows(0.0, 1.0, 0.5);
    assert_eq!(
        table.add(0.1, 0.1, 1.0).unwrap_err(),
        DataError::DimensionUnset(Dimension::Column)
    );

    let mut volume = IntervalVolume::builder()
        .rows(0.0, 1.0, 0.5)
        .columns(0.0, 1.0, 0.5);
    let err = volume.add_at(0, 0, 0, 1.0).unwrap_err();
    assert_eq!(err, DataError::DimensionUnset(Dimension::Level));
    assert_eq!(err.kind(), ErrorKind::State);
}

/// Test that an incomplete builder cannot be built.
#[test]
fn test_build_incomplete() {
    let mut builder = IntervalVolume::<f64>::builder().levels(0.0, 1.0, 0.5);
    assert_eq!(
        builder.build().unwrap_err(),
        DataError::DimensionUnset(Dimension::Row)
    );
    assert_eq!(builder.state(), BuilderState::Unconfigured);
}

/// Test that builder index helpers also require the dimension.
#[test]
fn test_index_helpers_incomplete() {
    let builder = IntervalTable::<f64>::builder().rows(0.0, 1.0, 0.5);
    assert_eq!(builder.row_index(0.7).unwrap(), 1);
    assert!(matches!(
        builder.column_index(0.7),
        Err(DataError::DimensionUnset(Dimension::Column))
    ));
}

// ============================================================================
// Deferred Error Tests
// ============================================================================

/// Test that an invalid dimension is reported by the next fallible call.
#[test]
fn test_invalid_dimension_deferred() {
    let mut builder = IntervalArray::builder().rows(1.0, 0.0, 0.5);
    assert!(matches!(
        builder.add_at(0, 1.0),
        Err(DataError::InvalidRange { .. })
    ));
    assert!(matches!(
        builder.build(),
        Err(DataError::InvalidRange { .. })
    ));
}

/// Test that the first deferred error wins.
#[test]
fn test_first_deferred_error_kept() {
    let mut builder = IntervalTable::builder()
        .rows(0.0, 1.0, 0.0)
        .columns(0.0, 1.0, f64::NAN);
    assert!(matches!(
        builder.build(),
        Err(DataError::InvalidDelta(_))
    ));
}

/// Test that redefining a dimension after configuration fails.
#[test]
fn test_redefine_after_configured() {
    let mut builder = IntervalTable::builder()
        .rows(0.0, 1.0, 0.5)
        .columns(0.0, 1.0, 0.5)
        .rows(0.0, 2.0, 0.5);
    let err = builder.build().unwrap_err();
    assert_eq!(err, DataError::AlreadyInitialized);
    assert_eq!(err.kind(), ErrorKind::State);
}

/// Test that derived builders are already configured.
#[test]
fn test_derived_builder_rejects_definition() {
    let model = IntervalArray::builder()
        .rows(0.0, 2.0, 1.0)
        .build()
        .unwrap();
    let mut builder = IntervalArrayBuilder::from_model(&model).rows(0.0, 4.0, 1.0);
    assert_eq!(builder.build().unwrap_err(), DataError::AlreadyInitialized);
}

// ============================================================================
// Single Use Tests
// ============================================================================

/// Test that a second build fails.
#[test]
fn test_double_build() {
    let mut builder = IntervalArray::builder().rows(0.0, 2.0, 1.0);
    builder.build().unwrap();
    let err = builder.build().unwrap_err();
    assert_eq!(err, DataError::AlreadyBuilt);
    assert_eq!(err.kind(), ErrorKind::State);
}

/// Test that data calls after building fail.
#[test]
fn test_data_after_build() {
    let mut builder = IntervalTable::builder()
        .rows(0.0, 2.0, 1.0)
        .columns(0.0, 2.0, 1.0);
    let table = builder.build().unwrap();
    assert_eq!(builder.add(0.5, 0.5, 1.0).unwrap_err(), DataError::AlreadyBuilt);
    assert_eq!(builder.row_index(0.5).unwrap_err(), DataError::AlreadyBuilt);
    assert_eq!(table.sum(), 0.0);
}

/// Test that a loader build is also single use.
#[test]
fn test_double_build_with() {
    let mut builder = IntervalVolume::builder()
        .rows(0.0, 1.0, 1.0)
        .columns(0.0, 1.0, 1.0)
        .levels(0.0, 1.0, 1.0);
    let volume = builder.build_with(|_, _, _| 2.0).unwrap();
    assert_eq!(volume.sum(), 2.0);
    assert!(matches!(
        builder.build_with(|_, _, _| 3.0),
        Err(DataError::AlreadyBuilt)
    ));
}

/// Test that defining a dimension after building defers a state error.
#[test]
fn test_define_after_build() {
    let mut builder = IntervalArray::builder().rows(0.0, 2.0, 1.0);
    builder.build().unwrap();
    let mut builder = builder.rows(0.0, 1.0, 1.0);
    assert_eq!(builder.build().unwrap_err(), DataError::AlreadyBuilt);
}

//! Tests for two-dimensional interval tables.
//!
//! These tests verify `IntervalTable` and its builder:
//! - Value and index access across rows and columns
//! - Zero-copy row views
//! - Collapsing columns into an array
//! - Row-oriented builder operations and structural checks
//!
//! ## Test Organization
//!
//! 1. **Scenario** - Build, add a row, read back
//! 2. **Access** - Keys, rows, bounds
//! 3. **Collapse** - Sum preservation and linearity
//! 4. **Row Operations** - `add_row`, `add_row_sequence`, `set_row_from`
//! 5. **Derived Builders** - `copy_of`, `from_model`, `add_table`
//! 6. **Summaries and Display**

use approx::assert_relative_eq;

use hazard_data::prelude::*;

// Magnitude-distance bins: rows [5, 7) by 0.5, columns [0, 30) by 10.
fn mag_distance() -> IntervalTableBuilder<f64> {
    IntervalTable::builder()
        .rows(5.0, 7.0, 0.5)
        .columns(0.0, 30.0, 10.0)
}

// ============================================================================
// Scenario Tests
// ============================================================================

/// Test the basic table workflow.
///
/// Verifies that a row added by value is read back by value and index.
#[test]
fn test_add_row_and_get() {
    let mut builder = IntervalTable::builder()
        .rows(0.0, 4.0, 2.0)
        .columns(0.0, 2.0, 1.0);
    builder.add_row(1.0, &[1.0, 2.0]).unwrap();
    let table = builder.build().unwrap();

    assert_eq!(table.rows(), &[1.0, 3.0]);
    assert_eq!(table.columns(), &[0.5, 1.5]);
    assert_eq!(table.get(1.0, 0.5).unwrap(), 1.0);
    assert_eq!(table.get(1.0, 1.5).unwrap(), 2.0);
    assert_eq!(table.get_at(1, 0).unwrap(), 0.0);
}

// ============================================================================
// Access Tests
// ============================================================================

/// Test edge accessors of both dimensions.
#[test]
fn test_edges() {
    let table = mag_distance().build().unwrap();
    assert_eq!(table.rows().len(), 4);
    assert_eq!(table.columns(), &[5.0, 15.0, 25.0]);
    assert_eq!(table.row_min(), 5.0);
    assert_eq!(table.row_max(), 7.0);
    assert_eq!(table.row_delta(), 0.5);
    assert_eq!(table.column_min(), 0.0);
    assert_eq!(table.column_max(), 30.0);
    assert_eq!(table.column_delta(), 10.0);
    assert_eq!(table.column_axis().len(), 3);
    assert_eq!(table.row_axis().len(), 4);
}

/// Test that each dimension is bounds-checked independently.
#[test]
fn test_get_out_of_range() {
    let table = mag_distance().build().unwrap();
    assert!(matches!(
        table.get(7.0, 5.0),
        Err(DataError::ValueOutOfRange { size: 4, .. })
    ));
    assert!(matches!(
        table.get(5.0, 30.0),
        Err(DataError::ValueOutOfRange { size: 3, .. })
    ));
    assert!(matches!(
        table.get_at(0, 3),
        Err(DataError::IndexOutOfBounds { index: 3, size: 3 })
    ));
}

/// Test that rows are keyed by column and share table storage.
#[test]
fn test_row_view() {
    let table = mag_distance().build_with(|m, r| m * r).unwrap();
    let row = table.row(5.6).unwrap();

    assert_eq!(row.x_values(), table.columns());
    assert_relative_eq!(row.y(2).unwrap(), 5.75 * 25.0);
    assert!(row.ptr_eq(&table.row_at(1).unwrap()));
    assert!(row.has_same_x(&table.row_at(3).unwrap()));
}

/// Test that row views cannot be written.
#[test]
fn test_row_view_immutable() {
    let table = mag_distance().build().unwrap();
    let row = table.row_at(0).unwrap();
    assert_eq!(row.min().set(1.0), Err(DataError::Immutable));
}

/// Test that row views outlive their table.
#[test]
fn test_row_view_outlives_table() {
    let row = {
        let table = mag_distance().build_with(|_, _| 1.0).unwrap();
        table.row_at(2).unwrap()
    };
    assert_eq!(row.y_values(), &[1.0, 1.0, 1.0]);
}

/// Test that a row converts to an independent mutable sequence.
#[test]
fn test_row_to_mutable() {
    let table = mag_distance().build_with(|_, _| 1.0).unwrap();
    let mut row = table.row_at(0).unwrap().to_mutable();
    row.multiply_scalar(3.0);
    assert_eq!(row.y_values(), &[3.0, 3.0, 3.0]);
    assert_eq!(table.get_at(0, 0).unwrap(), 1.0);
}

// ============================================================================
// Collapse Tests
// ============================================================================

/// Test that collapsing sums each row.
#[test]
fn test_collapse() {
    let mut builder = mag_distance();
    builder.add_row(5.0, &[1.0, 2.0, 3.0]).unwrap();
    builder.add_row(6.9, &[4.0]).unwrap();
    let table = builder.build().unwrap();
    let array = table.collapse();

    assert_eq!(array.rows(), table.rows());
    assert_eq!(array.values().y_values(), &[6.0, 0.0, 0.0, 4.0]);
}

/// Test that collapsing preserves the total.
#[test]
fn test_collapse_preserves_sum() {
    let table = mag_distance()
        .build_with(|m, r| (m - 4.0) * (r + 1.0).ln())
        .unwrap();
    assert_relative_eq!(table.collapse().sum(), table.sum(), epsilon = 1e-9);
}

/// Test that collapse is linear.
///
/// Verifies `collapse(a + b) == collapse(a) + collapse(b)`.
#[test]
fn test_collapse_linear() {
    let a = mag_distance().build_with(|m, r| m + r).unwrap();
    let b = mag_distance().build_with(|m, r| m * r).unwrap();

    let mut sum = IntervalTableBuilder::from_model(&a);
    sum.add_table(&a).unwrap().add_table(&b).unwrap();
    let combined = sum.build().unwrap().collapse();

    let (ca, cb) = (a.collapse(), b.collapse());
    for i in 0..combined.len() {
        assert_relative_eq!(
            combined.get_at(i).unwrap(),
            ca.get_at(i).unwrap() + cb.get_at(i).unwrap(),
            epsilon = 1e-9
        );
    }
}

// ============================================================================
// Row Operation Tests
// ============================================================================

/// Test that a row longer than the columns overruns.
#[test]
fn test_add_row_overrun() {
    let mut builder = mag_distance();
    let err = builder.add_row(5.0, &[1.0, 2.0, 3.0, 4.0]).unwrap_err();
    assert!(matches!(err, DataError::Overrun { len: 4, size: 3, .. }));
}

/// Test that an empty row is a no-op.
#[test]
fn test_add_row_empty() {
    let mut builder = mag_distance();
    builder.add_row(5.0, &[]).unwrap();
    assert_eq!(builder.build().unwrap().sum(), 0.0);
}

/// Test adding the y-values of a sequence to a row.
#[test]
fn test_add_row_sequence() {
    let seq = XySequence::create(&[5.0, 15.0, 25.0], &[0.1, 0.2, 0.3]).unwrap();
    let mut builder = mag_distance();
    builder.add_row_sequence(6.0, &seq).unwrap();
    builder.add_row_sequence(6.0, &seq).unwrap();
    let table = builder.build().unwrap();
    assert_relative_eq!(table.get(6.0, 25.0).unwrap(), 0.6, epsilon = 1e-12);
}

/// Test overwriting part of a row from a column offset.
#[test]
fn test_set_row_from() {
    let mut builder = mag_distance();
    builder.add_row(5.5, &[9.0, 9.0, 9.0]).unwrap();
    builder.set_row_from(5.5, 12.0, &[1.0, 2.0]).unwrap();
    let row = builder.build().unwrap().row(5.5).unwrap();
    assert_eq!(row.y_values(), &[9.0, 1.0, 2.0]);
}

/// Test that a row fill past the last column overruns.
#[test]
fn test_set_row_from_overrun() {
    let mut builder = mag_distance();
    assert!(matches!(
        builder.set_row_from(5.5, 25.0, &[1.0, 2.0]),
        Err(DataError::Overrun {
            offset: 2,
            len: 2,
            size: 3
        })
    ));
}

/// Test single-cell operations by value and index.
#[test]
fn test_set_and_add_cells() {
    let mut builder = mag_distance();
    builder
        .set(5.0, 0.0, 1.0)
        .unwrap()
        .add(5.2, 9.9, 1.0)
        .unwrap()
        .add_at(0, 0, 1.0)
        .unwrap()
        .set_at(3, 2, 7.0)
        .unwrap();
    let table = builder.build().unwrap();
    assert_eq!(table.get_at(0, 0).unwrap(), 3.0);
    assert_eq!(table.get(6.75, 25.0).unwrap(), 7.0);
}

/// Test index helpers of the builder.
#[test]
fn test_builder_indices() {
    let builder = mag_distance();
    assert_eq!(builder.row_index(6.6).unwrap(), 3);
    assert_eq!(builder.column_index(10.0).unwrap(), 1);
}

// ============================================================================
// Derived Builder Tests
// ============================================================================

/// Test that a copied builder carries values forward.
#[test]
fn test_copy_of() {
    let source = mag_distance().build_with(|_, r| r).unwrap();
    let mut builder = IntervalTableBuilder::copy_of(&source);
    builder.multiply(2.0).unwrap();
    let copy = builder.build().unwrap();
    assert_eq!(copy.get_at(0, 2).unwrap(), 50.0);
    assert_eq!(source.get_at(0, 2).unwrap(), 25.0);
}

/// Test that tables with different columns are rejected.
#[test]
fn test_add_table_mismatch() {
    let other = IntervalTable::builder()
        .rows(5.0, 7.0, 0.5)
        .columns(0.0, 30.0, 5.0)
        .build()
        .unwrap();
    let mut builder = mag_distance();
    let err = builder.add_table(&other).unwrap_err();
    assert!(matches!(err, DataError::MismatchedKeys(_)));
    assert_eq!(err.kind(), ErrorKind::Argument);
}

// ============================================================================
// Summary and Display Tests
// ============================================================================

/// Test 2-D min and max positions in row-major order.
#[test]
fn test_min_max_index() {
    let mut builder = mag_distance();
    builder.set_at(2, 1, 5.0).unwrap();
    builder.set_at(3, 0, 5.0).unwrap();
    builder.set_at(1, 2, -1.0).unwrap();
    let table = builder.build().unwrap();
    assert_eq!(table.max_index(), (2, 1));
    assert_eq!(table.min_index(), (1, 2));
}

/// Test text rendering.
#[test]
fn test_display() {
    let mut builder = IntervalTable::builder()
        .rows(0.0, 2.0, 1.0)
        .columns(0.0, 2.0, 1.0);
    builder.add_row(0.5, &[1.0, 0.25]).unwrap();
    let table = builder.build().unwrap();

    let expected = concat!(
        "          [    0.50,     1.50]\n",
        "[   0.50] [ 1.00e+00,  2.50e-01]\n",
        "[   1.50] [ 0.00e+00,  0.00e+00]\n",
    );
    assert_eq!(table.to_string(), expected);
}

/// Test conversion to an `ndarray` matrix.
#[cfg(feature = "ndarray")]
#[test]
fn test_to_array2() {
    let table = mag_distance().build_with(|m, r| m + r).unwrap();
    let matrix = table.to_array2();
    assert_eq!(matrix.shape(), &[4, 3]);
    assert_eq!(matrix[[1, 2]], table.get_at(1, 2).unwrap());
}

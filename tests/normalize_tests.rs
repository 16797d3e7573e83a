//! Row-classification tests for the structure normalizer
//!
//! The DOM half of `normalize` only moves however many rows these pure
//! functions tell it to, so the group-boundary rules are tested here.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use fixtable::normalize::{leading_header_rows, trailing_footer_rows, RowShape};

fn header(cells: usize) -> RowShape {
    RowShape {
        header_cells: cells,
        data_cells: 0,
    }
}

fn data(cells: usize) -> RowShape {
    RowShape {
        header_cells: 0,
        data_cells: cells,
    }
}

fn mixed(header_cells: usize, data_cells: usize) -> RowShape {
    RowShape {
        header_cells,
        data_cells,
    }
}

// ============================================================================
// Leading header rows
// ============================================================================

#[test]
fn test_leading_rows_stop_at_first_data_row() {
    let rows = [header(3), header(3), data(3), header(3)];
    assert_eq!(
        leading_header_rows(&rows),
        2,
        "the scan must stop at the first row carrying a data cell"
    );
}

#[test]
fn test_no_leading_rows_when_first_row_has_data() {
    let rows = [data(3), header(3)];
    assert_eq!(leading_header_rows(&rows), 0);
}

#[test]
fn test_mixed_row_is_not_a_header_row() {
    let rows = [mixed(1, 2), data(3)];
    assert_eq!(
        leading_header_rows(&rows),
        0,
        "a row with any data cell does not qualify"
    );
}

#[test]
fn test_empty_row_is_not_a_header_row() {
    let rows = [mixed(0, 0), data(3)];
    assert_eq!(leading_header_rows(&rows), 0);
}

#[test]
fn test_all_header_table_goes_entirely_to_the_header() {
    let rows = [header(2), header(2), header(2)];
    assert_eq!(leading_header_rows(&rows), 3);
}

#[test]
fn test_empty_table() {
    assert_eq!(leading_header_rows(&[]), 0);
    assert_eq!(trailing_footer_rows(&[], 0), 0);
}

// ============================================================================
// Trailing footer rows
// ============================================================================

#[test]
fn test_trailing_rows_collected_bottom_up() {
    let rows = [header(3), data(3), data(3), header(3), header(3)];
    assert_eq!(trailing_footer_rows(&rows, 1), 2);
}

#[test]
fn test_no_trailing_rows_when_last_row_has_data() {
    let rows = [header(3), data(3), data(3)];
    assert_eq!(trailing_footer_rows(&rows, 1), 0);
}

#[test]
fn test_trailing_scan_never_steals_header_rows() {
    // Every row is all-header: the leading scan claims them all, so the
    // footer scan must find nothing.
    let rows = [header(2), header(2)];
    let leading = leading_header_rows(&rows);
    assert_eq!(leading, 2);
    assert_eq!(
        trailing_footer_rows(&rows, leading),
        0,
        "rows already in the header group are off limits to the footer scan"
    );
}

#[test]
fn test_single_data_row_between_header_and_footer() {
    let rows = [header(2), data(2), header(2)];
    let leading = leading_header_rows(&rows);
    assert_eq!(leading, 1);
    assert_eq!(trailing_footer_rows(&rows, leading), 1);
}

// ============================================================================
// Idempotency
// ============================================================================

#[test]
fn test_classification_is_idempotent() {
    // After the first pass moves the leading and trailing rows out of the
    // body, a second pass over the remainder must move nothing.
    let rows = vec![header(3), header(3), data(3), data(3), header(3)];
    let leading = leading_header_rows(&rows);
    let trailing = trailing_footer_rows(&rows, leading);
    assert_eq!((leading, trailing), (2, 1));

    let remainder: Vec<RowShape> = rows[leading..rows.len() - trailing].to_vec();
    assert_eq!(leading_header_rows(&remainder), 0);
    assert_eq!(trailing_footer_rows(&remainder, 0), 0);
}

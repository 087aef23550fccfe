//! Nested region extraction
//!
//! An annotated header cell owns a rectangular region of the grid: it runs
//! rightward until the next titled sibling column and downward until the
//! next record begins in the id column. This module carves that region out
//! as a grid of its own, re-attaching the sub-header rows so a nested list
//! carries its own header exactly like the top-level sheet does.

use super::grid::{is_blank, Grid};

/// An extracted nested region plus the cursor distance it consumed
///
/// The caller folds `rows_consumed` / `cols_consumed` into its own loop
/// cursors so it never re-scans cells the nested region already owns.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// The nested region as a standalone grid (sub-headers first)
    pub grid: Grid,
    /// Entry rows taken from the outer grid, starting row included
    pub rows_consumed: usize,
    /// Columns spanned, starting column included
    pub cols_consumed: usize,
}

/// Carve the nested region anchored at `(row, col)` out of `grid`
///
/// The column span extends while the top header row is blank; a titled
/// header bounds the region (the next sibling field). The row span extends
/// while the id column stays blank; a non-blank id cell on a later row
/// means the next record has begun. `max_entries` caps the number of entry
/// rows regardless of id-column content - single-entry extraction
/// (`Some(1)`) is how `(obj)` regions stay on their own row.
///
/// Rows `1..header_depth` of the outer grid, clipped to the column span,
/// are prepended and become the subgrid's own header rows. The subgrid's
/// header depth is therefore one less than the outer grid's.
pub fn extract_subgrid(
    grid: &Grid,
    header_depth: usize,
    row: usize,
    col: usize,
    max_entries: Option<usize>,
) -> Extraction {
    // Column extent: stop at the next titled header
    let mut end_col = col + 1;
    while end_col < grid.width() && is_blank(grid.cell(0, end_col)) {
        end_col += 1;
    }

    // Row extent: stop at the next record or the entry cap
    let mut entry_rows: Vec<Vec<String>> = Vec::new();
    let mut r = row;
    while r < grid.height() {
        if r > row && !is_blank(grid.cell(r, 0)) {
            break;
        }
        if let Some(max) = max_entries {
            if entry_rows.len() >= max {
                break;
            }
        }
        entry_rows.push(grid.row_slice(r, col..end_col));
        r += 1;
    }
    let rows_consumed = entry_rows.len();

    // Sub-headers become the subgrid's own header rows
    let sub_header_end = header_depth.min(grid.height());
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(rows_consumed + header_depth);
    for header_row in 1..sub_header_end {
        rows.push(grid.row_slice(header_row, col..end_col));
    }
    rows.extend(entry_rows);

    Extraction {
        grid: Grid::from_rows(rows),
        rows_consumed,
        cols_consumed: end_col - col,
    }
}

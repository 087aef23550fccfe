//! # gridson
//!
//! Spreadsheet range to nested JSON exporter written in Rust.
//!
//! ## Features
//!
//! - **Nested Structures**: `(obj)` and `(list)` header tags turn flat
//!   ranges into nested objects and lists
//! - **Multi-Row Headers**: sub-header rows describe the fields of nested
//!   regions, recursively
//! - **Typed Scalars**: cells coerce to integers, floats, booleans, or text
//! - **Forgiving**: duplicate keys, untitled columns, and empty regions
//!   degrade into diagnostics, never hard failures
//! - **Deterministic Output**: the same grid always serializes to
//!   byte-identical JSON
//! - **Batch Fetch**: one HTTP call per spreadsheet covers all requested
//!   ranges (feature `fetch`)
//!
//! ## Usage Examples
//!
//! ### Converting a grid
//!
//! ```rust
//! use gridson::sheet_to_json;
//!
//! let rows = vec![
//!     vec!["Id".to_string(), "Tags (list)".to_string()],
//!     vec!["1".to_string(), "a".to_string()],
//!     vec!["".to_string(), "b".to_string()],
//!     vec!["2".to_string(), "c".to_string()],
//! ];
//! let json = sheet_to_json(rows, 1);
//! assert_eq!(json.to_string(), r#"[{"Id":1,"Tags":["a","b"]},{"Id":2,"Tags":["c"]}]"#);
//! ```
//!
//! ### Inspecting diagnostics
//!
//! ```rust
//! use gridson::{sheet_to_json_with_options, ConvertOptions};
//!
//! let rows = vec![
//!     vec!["X".to_string(), "X ".to_string()],
//!     vec!["1".to_string(), "2".to_string()],
//! ];
//! let output = sheet_to_json_with_options(rows, &ConvertOptions::default());
//! assert!(output.has_warnings());
//! ```

/// Core conversion modules
pub mod core;

/// Spreadsheet backend plumbing
pub mod sheets;

/// Utility modules
pub mod utils;

// Re-export core conversion types and functions
pub use core::grid2json;
pub use core::grid2json::{
    classify_header, coerce_scalar, convert_grid, extract_subgrid, Annotation, BuildMode,
    ConvertOptions, ConvertOutput, Grid,
};

// Re-export backend plumbing
pub use sheets::{batch_to_grids, cell_text, values_to_grid, BatchGetResponse, ValueRange};

#[cfg(feature = "fetch")]
pub use sheets::{Auth, SheetsClient};

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{ExportError, ExportResult};
pub use utils::files;
pub use utils::progress::Progress;

/// Convert raw rows into a JSON array of records
///
/// # Arguments
/// * `rows` - raw cell rows, possibly jagged
/// * `header_depth` - number of leading header/sub-header rows
///
/// # Returns
/// The converted JSON array
pub fn sheet_to_json(rows: Vec<Vec<String>>, header_depth: usize) -> serde_json::Value {
    let options = ConvertOptions::with_header_depth(header_depth);
    sheet_to_json_with_options(rows, &options).value
}

/// Convert raw rows with custom options, keeping diagnostics
///
/// # Arguments
/// * `rows` - raw cell rows, possibly jagged
/// * `options` - conversion options
///
/// # Returns
/// The converted JSON array plus any diagnostics
pub fn sheet_to_json_with_options(
    rows: Vec<Vec<String>>,
    options: &ConvertOptions,
) -> ConvertOutput {
    let grid = Grid::from_rows(rows);
    convert_grid(&grid, options)
}

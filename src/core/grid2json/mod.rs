//! Grid to JSON conversion module
//!
//! This module turns a rectangular grid of raw cell values into a nested
//! JSON document, driven by the header annotation grammar.
//!
//! # Module Structure
//!
//! - `grid`: rectangular grid type and jagged-row normalization
//! - `header`: header cell classification (`(obj)` / `(list)` tags, clean keys)
//! - `value`: scalar coercion (integer, float, boolean, string)
//! - `subgrid`: nested region extraction with explicit cursor deltas
//! - `builder`: the recursive tree builder shared by array and object modes
//!
//! # Example
//!
//! ```rust
//! use gridson::core::grid2json::{convert_grid, ConvertOptions, Grid};
//!
//! let grid = Grid::from_rows(vec![
//!     vec!["Id".into(), "Name".into()],
//!     vec!["1".into(), "Bob".into()],
//! ]);
//! let output = convert_grid(&grid, &ConvertOptions::default());
//! assert_eq!(output.value.as_array().unwrap().len(), 1);
//! ```

// Submodules
pub mod builder;
pub mod grid;
pub mod header;
pub mod subgrid;
pub mod value;


// Re-export main types for convenience
pub use builder::{BuildMode, TreeBuilder};
pub use grid::Grid;
pub use header::{classify_header, Annotation};
pub use subgrid::{extract_subgrid, Extraction};
pub use value::coerce_scalar;

use crate::utils::diagnostics::{warning_count, Diagnostic};

/// Conversion options
///
/// Explicit configuration passed into the entry point; there is no ambient
/// process-wide state.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Number of leading rows treated as header/sub-header rows
    /// Default: 1
    pub header_depth: usize,

    /// Also report informational diagnostics (empty results etc.)
    /// Default: true
    pub verbose: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            header_depth: 1,
            verbose: true,
        }
    }
}

impl ConvertOptions {
    /// Options for a sheet whose header spans `depth` rows
    pub fn with_header_depth(depth: usize) -> Self {
        Self {
            header_depth: depth,
            ..Default::default()
        }
    }
}

/// Conversion output with accumulated diagnostics
#[derive(Debug, Clone)]
pub struct ConvertOutput {
    /// The converted document (always a JSON array at the top level)
    pub value: serde_json::Value,
    /// Diagnostics generated during conversion
    pub diagnostics: Vec<Diagnostic>,
}

impl ConvertOutput {
    pub fn has_warnings(&self) -> bool {
        warning_count(&self.diagnostics) > 0
    }
}

/// Convert a grid into a JSON array of records
///
/// The top-level entry point: an array-mode build over the whole grid
/// starting below the header rows. Never fails - structural ambiguity is
/// reported through diagnostics and degenerate input yields an empty array.
pub fn convert_grid(grid: &Grid, options: &ConvertOptions) -> ConvertOutput {
    let mut diagnostics = Vec::new();

    let value = TreeBuilder::new(&mut diagnostics).build(
        grid,
        options.header_depth,
        BuildMode::Array,
    );

    if options.verbose && value.as_array().is_some_and(Vec::is_empty) {
        diagnostics.push(Diagnostic::info("conversion produced no records"));
    }

    ConvertOutput { value, diagnostics }
}

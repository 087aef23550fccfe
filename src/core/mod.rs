//! Core conversion modules
//!
//! This module contains the main conversion engine:
//! - `grid2json`: grid to nested JSON converter (recursive descent over
//!   header annotations)

pub mod grid2json;

// Re-export main types and functions from grid2json
pub use grid2json::{
    classify_header, coerce_scalar, convert_grid, extract_subgrid, Annotation, BuildMode,
    ConvertOptions, ConvertOutput, Extraction, Grid, TreeBuilder,
};

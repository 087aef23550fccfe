//! Recursive tree building
//!
//! One traversal serves both shapes the output can take. Array mode turns
//! each record into an object and collects them; object mode flattens every
//! row's fields onto a single object. The two differ only in assembly, so
//! the recursion is a single procedure parameterized by a mode tag.
//!
//! Cursor discipline: a nested region reports how many rows and columns it
//! consumed (see [`Extraction`](super::subgrid::Extraction)); the caller
//! folds those deltas into its own loop so continuation rows and spanned
//! columns are never re-scanned. Nothing in here returns an error - bad
//! cells degrade into diagnostics and dropped values.

use serde_json::{Map, Value};

use super::grid::{is_blank, Grid};
use super::header::{classify_header, Annotation};
use super::subgrid::extract_subgrid;
use super::value::coerce_scalar;
use crate::utils::diagnostics::Diagnostic;

/// How the recursion assembles row fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// One object per record, collected into an array
    Array,
    /// All rows flattened onto a single object
    Object,
}

/// Recursive-descent builder over one grid and its nested regions
pub struct TreeBuilder<'d> {
    diagnostics: &'d mut Vec<Diagnostic>,
}

impl<'d> TreeBuilder<'d> {
    pub fn new(diagnostics: &'d mut Vec<Diagnostic>) -> Self {
        TreeBuilder { diagnostics }
    }

    /// Build a JSON value from `grid`, whose first `header_depth` rows are
    /// headers. Subgrids re-enter here with `header_depth - 1`, since
    /// extraction promotes the sub-header rows to be their header rows.
    pub fn build(&mut self, grid: &Grid, header_depth: usize, mode: BuildMode) -> Value {
        let mut entries: Vec<Value> = Vec::new();
        let mut flat = Map::new();

        let mut row = header_depth;
        while row < grid.height() {
            let mut fields = Map::new();
            let mut rows_consumed = 1usize;
            let id_blank = is_blank(grid.cell(row, 0));

            let mut col = 0;
            while col < grid.width() {
                let header = if header_depth > 0 { grid.cell(0, col) } else { "" };
                let (annotation, key) = classify_header(header);

                // A blank cell on a continuation row contributes nothing at
                // this column; skip it before any extraction happens.
                if is_blank(grid.cell(row, col)) && id_blank {
                    col += 1;
                    continue;
                }

                match annotation {
                    Annotation::List => {
                        let ext = extract_subgrid(grid, header_depth, row, col, None);
                        let value =
                            self.build(&ext.grid, header_depth.saturating_sub(1), BuildMode::Array);
                        rows_consumed = rows_consumed.max(ext.rows_consumed);
                        self.attach(mode, &mut entries, &mut flat, &mut fields, &key, value, row, col);
                        col += ext.cols_consumed.max(1);
                    }
                    Annotation::Object => {
                        let ext = extract_subgrid(grid, header_depth, row, col, Some(1));
                        let value = self.build(
                            &ext.grid,
                            header_depth.saturating_sub(1),
                            BuildMode::Object,
                        );
                        rows_consumed = rows_consumed.max(ext.rows_consumed);
                        self.attach(mode, &mut entries, &mut flat, &mut fields, &key, value, row, col);
                        col += ext.cols_consumed.max(1);
                    }
                    Annotation::None => {
                        let value = coerce_scalar(grid.cell(row, col));
                        self.attach(mode, &mut entries, &mut flat, &mut fields, &key, value, row, col);
                        col += 1;
                    }
                }
            }

            if mode == BuildMode::Array && !fields.is_empty() {
                entries.push(Value::Object(fields));
            }

            row += rows_consumed.max(1);
        }

        match mode {
            BuildMode::Array => Value::Array(entries),
            BuildMode::Object => Value::Object(flat),
        }
    }

    /// Attach one produced value, applying the emptiness filter, the
    /// bare-value rule, and the first-write-wins collision policy.
    #[allow(clippy::too_many_arguments)]
    fn attach(
        &mut self,
        mode: BuildMode,
        entries: &mut Vec<Value>,
        flat: &mut Map<String, Value>,
        fields: &mut Map<String, Value>,
        key: &str,
        value: Value,
        row: usize,
        col: usize,
    ) {
        if is_empty_value(&value) {
            return;
        }

        if key.is_empty() {
            // Untitled column: in array mode the value joins the output
            // array positionally; an object has no positional slot.
            match mode {
                BuildMode::Array => entries.push(value),
                BuildMode::Object => {
                    self.diagnostics.push(
                        Diagnostic::warning("bare value in object region dropped (untitled column)")
                            .at(row, col),
                    );
                }
            }
            return;
        }

        let target = match mode {
            BuildMode::Array => fields,
            BuildMode::Object => flat,
        };
        if target.contains_key(key) {
            self.diagnostics.push(
                Diagnostic::warning(format!(
                    "duplicate field '{}' dropped (first value kept)",
                    key
                ))
                .at(row, col),
            );
            return;
        }
        target.insert(key.to_string(), value);
    }
}

/// Values the emptiness filter refuses to attach
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        _ => false,
    }
}

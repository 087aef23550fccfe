//! Spreadsheet backend plumbing
//!
//! The engine only ever sees a rectangular grid; this module covers the
//! distance between it and the spreadsheet backend's wire format. The
//! batch values payload arrives as JSON (`ValueRange` per requested
//! range), cells are rendered to their canonical text, and each range is
//! normalized into a [`Grid`].
//!
//! Fetching over HTTP lives in [`client`] behind the `fetch` feature;
//! everything else here also works on a payload read from disk or stdin.

#[cfg(feature = "fetch")]
pub mod client;

#[cfg(feature = "fetch")]
pub use client::{Auth, SheetsClient};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::core::grid2json::Grid;

/// One fetched range of cell values
///
/// Mirrors the backend's `values:batchGet` response entry. Trailing empty
/// cells and rows are omitted on the wire, hence the jagged `values`.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueRange {
    /// The range the backend actually resolved (e.g. `Sheet1!A1:D20`)
    #[serde(default)]
    pub range: String,
    #[serde(rename = "majorDimension", default)]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

/// The backend's batch response for one spreadsheet
#[derive(Debug, Clone, Deserialize)]
pub struct BatchGetResponse {
    #[serde(rename = "spreadsheetId", default)]
    pub spreadsheet_id: String,
    #[serde(rename = "valueRanges", default)]
    pub value_ranges: Vec<ValueRange>,
}

/// Render one backend cell to its canonical text
///
/// Strings pass through, numbers and booleans use their JSON rendering
/// (the coercer re-types them during conversion), null becomes an empty
/// cell. Nested structures should not appear in a values payload; their
/// compact JSON text is kept rather than dropped.
pub fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Normalize one range's jagged values into a rectangular grid
pub fn values_to_grid(values: &[Vec<Value>]) -> Grid {
    Grid::from_rows(
        values
            .iter()
            .map(|row| row.iter().map(cell_text).collect())
            .collect(),
    )
}

/// Normalize a whole batch response, keeping the request order
pub fn batch_to_grids(response: &BatchGetResponse) -> IndexMap<String, Grid> {
    let mut grids = IndexMap::with_capacity(response.value_ranges.len());
    for value_range in &response.value_ranges {
        grids.insert(value_range.range.clone(), values_to_grid(&value_range.values));
    }
    grids
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_text_canonical_forms() {
        assert_eq!(cell_text(&json!("hello")), "hello");
        assert_eq!(cell_text(&json!(42)), "42");
        assert_eq!(cell_text(&json!(10.5)), "10.5");
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&Value::Null), "");
    }

    #[test]
    fn test_values_to_grid_pads_jagged_rows() {
        let values = vec![
            vec![json!("Id"), json!("Name")],
            vec![json!(1)],
        ];
        let grid = values_to_grid(&values);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.cell(1, 0), "1");
        assert_eq!(grid.cell(1, 1), "");
    }

    #[test]
    fn test_batch_response_deserializes() {
        let payload = r#"{
            "spreadsheetId": "abc123",
            "valueRanges": [
                {"range": "Items!A1:B3", "majorDimension": "ROWS",
                 "values": [["Id", "Name"], [1, "Bob"]]}
            ]
        }"#;
        let response: BatchGetResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.spreadsheet_id, "abc123");
        assert_eq!(response.value_ranges.len(), 1);

        let grids = batch_to_grids(&response);
        let grid = &grids["Items!A1:B3"];
        assert_eq!(grid.cell(1, 1), "Bob");
    }
}

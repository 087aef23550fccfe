//! Integration tests for Gridson range conversion

use gridson::{
    classify_header, coerce_scalar, convert_grid, sheet_to_json, sheet_to_json_with_options,
    values_to_grid, Annotation, BatchGetResponse, ConvertOptions, Grid,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

// ============================================================================
// Grid Normalization
// ============================================================================

mod normalization {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rectangularity() {
        let jagged = vec![
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec!["d".to_string()],
            vec![],
            vec!["e".to_string(), "f".to_string()],
        ];
        let grid = Grid::from_rows(jagged);
        assert_eq!(grid.width(), 3);
        for row in 0..grid.height() {
            assert_eq!(grid.row(row).len(), 3);
        }
        // Padding lands at the end of short rows, never in the middle
        assert_eq!(grid.cell(3, 0), "e");
        assert_eq!(grid.cell(3, 1), "f");
        assert_eq!(grid.cell(3, 2), "");
    }

    #[test]
    fn test_empty_input() {
        let grid = Grid::from_rows(Vec::new());
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.width(), 0);
    }
}

// ============================================================================
// Scalar Coercion
// ============================================================================

mod coercion {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_coercion_ordering() {
        assert_eq!(coerce_scalar("42"), json!(42));
        assert_eq!(coerce_scalar("42.5"), json!(42.5));
        assert_eq!(coerce_scalar("true"), json!(true));
        assert_eq!(coerce_scalar("TRUE"), json!(true));
        assert_eq!(coerce_scalar("hello"), json!("hello"));
        assert_eq!(coerce_scalar(""), json!(""));
    }

    #[test]
    fn test_integer_wins_over_float() {
        assert!(coerce_scalar("1").is_i64());
        assert!(coerce_scalar("10.5").is_f64());
    }
}

// ============================================================================
// Header Classification
// ============================================================================

mod classification {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classification_table() {
        let cases = [
            ("Name", Annotation::None, "Name"),
            ("Tags (list)", Annotation::List, "Tags"),
            ("Meta (obj)", Annotation::Object, "Meta"),
            ("  Weird   Header  (obj)", Annotation::Object, "WeirdHeader"),
        ];
        for (raw, annotation, key) in cases {
            assert_eq!(classify_header(raw), (annotation, key.to_string()));
        }
    }
}

// ============================================================================
// End-to-End Conversion
// ============================================================================

mod conversion {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ground_truth_example() {
        let json = sheet_to_json(
            rows(&[
                &["Id", "Tags (list)"],
                &["1", "a"],
                &["", "b"],
                &["2", "c"],
            ]),
            1,
        );
        assert_eq!(
            json.to_string(),
            r#"[{"Id":1,"Tags":["a","b"]},{"Id":2,"Tags":["c"]}]"#
        );
    }

    #[test]
    fn test_deep_nesting() {
        let json = sheet_to_json(
            rows(&[
                &["Id", "Loadout (obj)", "", "", "Notes"],
                &["", "weapon", "mods (list)", "", ""],
                &["", "", "", "", ""],
                &["1", "rifle", "scope", "", "primary"],
            ]),
            3,
        );
        assert_eq!(
            json,
            json!([{
                "Id": 1,
                "Loadout": {"weapon": "rifle", "mods": ["scope"]},
                "Notes": "primary",
            }])
        );
    }

    #[test]
    fn test_collision_first_write_wins() {
        let output = sheet_to_json_with_options(
            rows(&[&["X", "X"], &["1", "2"]]),
            &ConvertOptions::default(),
        );
        assert_eq!(output.value, json!([{"X": 1}]));
        assert!(output.has_warnings());
    }

    #[test]
    fn test_emptiness_suppression() {
        let output = sheet_to_json_with_options(
            rows(&[&["Id", "Empty", "Tags (list)"], &["1", "", ""]]),
            &ConvertOptions::default(),
        );
        assert_eq!(output.value, json!([{"Id": 1}]));
    }

    #[test]
    fn test_idempotence() {
        let data: &[&[&str]] = &[
            &["Id", "Name", "Stats (obj)", "", "Tags (list)"],
            &["", "", "hp", "mp", ""],
            &["1", "Bob", "10", "5", "red"],
            &["", "", "", "", "blue"],
            &["2", "Ana", "7", "3", "green"],
        ];
        let first = sheet_to_json(rows(data), 2).to_string();
        let second = sheet_to_json(rows(data), 2).to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_failure_for_any_string_grid() {
        // Structural ambiguity degrades; it never aborts the conversion
        let awkward: &[&[&str]] = &[
            &["(obj)", "(list)", "A (obj)(list)", ""],
            &["x", "", "y", "z"],
            &["", "w", "", ""],
        ];
        for depth in 0..4 {
            let grid = Grid::from_rows(rows(awkward));
            let output = convert_grid(&grid, &ConvertOptions::with_header_depth(depth));
            assert!(output.value.is_array());
        }
    }
}

// ============================================================================
// Backend Payload Bridging
// ============================================================================

mod payloads {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_batch_payload_to_documents() {
        let payload = r#"{
            "spreadsheetId": "abc",
            "valueRanges": [{
                "range": "Monsters!A1:C4",
                "majorDimension": "ROWS",
                "values": [
                    ["Id", "Name", "Drops (list)"],
                    [1, "Slime", "gel"],
                    [null, null, "core"],
                    [2, "Wolf", "pelt"]
                ]
            }]
        }"#;
        let response: BatchGetResponse = serde_json::from_str(payload).unwrap();
        let grid = values_to_grid(&response.value_ranges[0].values);
        let output = convert_grid(&grid, &ConvertOptions::default());
        assert_eq!(
            output.value,
            json!([
                {"Id": 1, "Name": "Slime", "Drops": ["gel", "core"]},
                {"Id": 2, "Name": "Wolf", "Drops": ["pelt"]},
            ])
        );
    }

    #[test]
    fn test_numeric_cells_keep_their_types() {
        let values = vec![
            vec![json!("Count"), json!("Ratio"), json!("Active")],
            vec![json!(3), json!(0.5), json!(true)],
        ];
        let grid = values_to_grid(&values);
        let output = convert_grid(&grid, &ConvertOptions::default());
        assert_eq!(
            output.value,
            json!([{"Count": 3, "Ratio": 0.5, "Active": true}])
        );
    }
}

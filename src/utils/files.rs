//! Output file handling
//!
//! Each fetched range becomes one JSON document on disk. The file name is
//! derived from the range reference (`Sheet1!A1:D20` → `Sheet1.json`), with
//! anything that could upset a filesystem replaced by underscores.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::error::ExportResult;

/// Derive an output file name from a range reference
///
/// Takes the sheet title before `!` (the A1 coordinates carry no meaning in
/// a file name), keeps `[A-Za-z0-9._-]`, and appends `.json`. Quoted sheet
/// titles (`'Q1 Data'!A:C`) lose their quotes.
pub fn range_file_name(range: &str) -> String {
    let title = range.split('!').next().unwrap_or(range);
    let title = title.trim_matches('\'').trim();

    let mut name = String::with_capacity(title.len());
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-') {
            name.push(ch);
        } else {
            name.push('_');
        }
    }

    if name.is_empty() {
        name.push_str("range");
    }
    name.push_str(".json");
    name
}

/// Resolve the output path for a range under an output directory
pub fn range_output_path(output_dir: &Path, range: &str) -> PathBuf {
    output_dir.join(range_file_name(range))
}

/// Write a JSON document to disk, creating parent directories as needed
pub fn write_json(path: &Path, value: &Value, pretty: bool) -> ExportResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');

    fs::write(path, text)?;
    Ok(())
}

/// Serialize a JSON document to its on-disk form without writing it
pub fn render_json(value: &Value, pretty: bool) -> ExportResult<String> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    text.push('\n');
    Ok(text)
}

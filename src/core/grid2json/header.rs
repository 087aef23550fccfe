//! Header cell classification
//!
//! A header cell names its column and may carry a structural tag telling
//! the tree builder how to read the cells below it: `(obj)` opens a nested
//! object region, `(list)` a nested list region. The clean key is the
//! header with all whitespace and the tag stripped, so `" Unit Cost "` and
//! `"UnitCost"` name the same field.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any run of whitespace, stripped before tag matching
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    /// Nested-object tag
    static ref OBJECT_TAG: Regex = Regex::new(r"\(obj\)").unwrap();
    /// Nested-list tag
    static ref LIST_TAG: Regex = Regex::new(r"\(list\)").unwrap();
}

/// Structural annotation carried by a header cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    /// Plain scalar column
    None,
    /// Column opens a nested object region
    Object,
    /// Column opens a nested list region
    List,
}

/// Classify a raw header cell into `(annotation, clean_key)`
///
/// Whitespace is stripped first, then the tags are matched on the stripped
/// text. `(obj)` is checked before `(list)`; a malformed header carrying
/// both tags classifies as an object and keeps the unmatched tag in its
/// key. A header matching neither tag is a plain column.
pub fn classify_header(raw: &str) -> (Annotation, String) {
    let stripped = WHITESPACE.replace_all(raw, "");

    if OBJECT_TAG.is_match(&stripped) {
        let key = OBJECT_TAG.replace_all(&stripped, "").into_owned();
        return (Annotation::Object, key);
    }
    if LIST_TAG.is_match(&stripped) {
        let key = LIST_TAG.replace_all(&stripped, "").into_owned();
        return (Annotation::List, key);
    }
    (Annotation::None, stripped.into_owned())
}

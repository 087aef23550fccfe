//! Scalar cell coercion
//!
//! Cells arrive as text; the output wants typed scalars. Parses are tried
//! in a fixed order: integer, then float, then boolean, then the original
//! text. The order is load-bearing: `"1"` must become an integer rather
//! than a string, `"10.5"` must never half-parse as an integer, and
//! `"true"` must become a boolean before the string fallback sees it.

use serde_json::Value;

/// Coerce one raw cell into a typed JSON scalar
///
/// Parses run on the trimmed text; the string fallback preserves the
/// original untrimmed cell. An empty cell coerces to an empty string - the
/// emptiness filter downstream decides whether it survives.
pub fn coerce_scalar(raw: &str) -> Value {
    let trimmed = raw.trim();

    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::Number(int.into());
    }

    if let Ok(float) = trimmed.parse::<f64>() {
        // NaN and infinities have no JSON representation; fall through
        if let Some(number) = serde_json::Number::from_f64(float) {
            return Value::Number(number);
        }
    }

    if trimmed.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    Value::String(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer() {
        assert_eq!(coerce_scalar("42"), json!(42));
        assert_eq!(coerce_scalar("-7"), json!(-7));
        assert_eq!(coerce_scalar(" 42 "), json!(42));
    }

    #[test]
    fn test_float() {
        assert_eq!(coerce_scalar("42.5"), json!(42.5));
        assert_eq!(coerce_scalar("-0.25"), json!(-0.25));
        assert_eq!(coerce_scalar("1e3"), json!(1000.0));
    }

    #[test]
    fn test_float_never_truncates_to_integer() {
        let value = coerce_scalar("10.5");
        assert!(value.is_f64());
        assert_eq!(value, json!(10.5));
    }

    #[test]
    fn test_boolean_any_case() {
        assert_eq!(coerce_scalar("true"), json!(true));
        assert_eq!(coerce_scalar("TRUE"), json!(true));
        assert_eq!(coerce_scalar("False"), json!(false));
    }

    #[test]
    fn test_string_fallback_preserves_original() {
        assert_eq!(coerce_scalar("hello"), json!("hello"));
        assert_eq!(coerce_scalar(" spaced "), json!(" spaced "));
        assert_eq!(coerce_scalar("12abc"), json!("12abc"));
    }

    #[test]
    fn test_empty_is_empty_string_not_error() {
        assert_eq!(coerce_scalar(""), json!(""));
    }

    #[test]
    fn test_non_finite_floats_stay_text() {
        assert_eq!(coerce_scalar("NaN"), json!("NaN"));
        assert_eq!(coerce_scalar("inf"), json!("inf"));
    }
}

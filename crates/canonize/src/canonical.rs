//! The canonical encoder

use canonize_core::{Number, Value};
use serde::Serialize;

/// Encode a value in canonical form.
///
/// Pure and total: no validation, no error path, no mutation of the
/// input. Recursion is bounded only by the structural depth of the value;
/// callers processing untrusted input should use
/// [`canonize_bounded`](crate::canonize_bounded) instead.
///
/// # Example
///
/// ```rust
/// use canonize::canonize;
/// use canonize_core::Value;
///
/// let value = Value::from_serialize(&serde_json::json!([1, "hello", true]));
/// assert_eq!(canonize(&value), r#"[0:1;1:"hello";2:true;]"#);
/// ```
pub fn canonize(value: &Value) -> String {
    let mut out = String::new();
    write_canonical_value(&mut out, value);
    out
}

/// Classify a serializable host value and encode it in one step.
///
/// Values outside the supported space degrade to their best-effort
/// fallback text instead of failing; that text carries no canonicality
/// guarantee.
pub fn canonize_serialize<T: Serialize>(value: &T) -> String {
    canonize(&Value::from_serialize(value))
}

/// Write a value in canonical form
fn write_canonical_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Undefined => out.push_str("undefined"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(out, n),
        Value::String(s) => write_quoted_string(out, s),
        Value::Sequence(items) => {
            out.push('[');
            // Positional indices are the keys; order is data, never sorted.
            for (index, item) in items.iter().enumerate() {
                out.push_str(&index.to_string());
                out.push(':');
                write_canonical_value(out, item);
                out.push(';');
            }
            out.push(']');
        }
        Value::Mapping(fields) => {
            out.push('{');
            // Sort keys ascending by UTF-8 bytes, which is code-point order.
            let mut entries: Vec<(&String, &Value)> = fields.iter().collect();
            entries.sort_unstable_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));
            for (key, child) in entries {
                out.push_str(key);
                out.push(':');
                write_canonical_value(out, child);
                out.push(';');
            }
            out.push('}');
        }
        Value::Unsupported(text) => out.push_str(text),
    }
}

/// Write a number, distinguishing negative zero from positive zero.
fn write_number(out: &mut String, n: &Number) {
    if n.is_negative_zero() {
        out.push_str("-0");
    } else {
        out.push_str(&n.to_string());
    }
}

/// Write a string wrapped in double quotes.
///
/// Only the `"` character is escaped. This minimal escaping is part of
/// the format contract and must not be extended to full JSON escaping.
fn write_quoted_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        if c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use canonize_core::Map;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn from_json(v: serde_json::Value) -> Value {
        Value::from(v)
    }

    #[test]
    fn test_primitives() {
        assert_eq!(canonize(&Value::from("hello")), r#""hello""#);
        assert_eq!(canonize(&Value::from(42)), "42");
        assert_eq!(canonize(&Value::from(3.14)), "3.14");
        assert_eq!(canonize(&Value::from(true)), "true");
        assert_eq!(canonize(&Value::from(false)), "false");
        assert_eq!(canonize(&Value::Null), "null");
        assert_eq!(canonize(&Value::Undefined), "undefined");
    }

    #[test]
    fn test_special_numeric_values() {
        assert_eq!(canonize(&Value::from(f64::NAN)), "NaN");
        assert_eq!(canonize(&Value::from(f64::INFINITY)), "Infinity");
        assert_eq!(canonize(&Value::from(f64::NEG_INFINITY)), "-Infinity");
        assert_eq!(canonize(&Value::from(0.0)), "0");
        assert_eq!(canonize(&Value::from(-0.0)), "-0");
    }

    #[test]
    fn test_quote_is_the_only_escape() {
        assert_eq!(canonize(&Value::from(r#"say "hi""#)), r#""say \"hi\"""#);
        // Backslashes and control characters pass through verbatim
        assert_eq!(canonize(&Value::from("a\\b")), "\"a\\b\"");
        assert_eq!(canonize(&Value::from("line1\nline2")), "\"line1\nline2\"");
    }

    #[test]
    fn test_sequence_literal() {
        let v = from_json(json!([1, "hello", true]));
        assert_eq!(canonize(&v), r#"[0:1;1:"hello";2:true;]"#);
    }

    #[test]
    fn test_mapping_literal_keys_sorted() {
        let v = from_json(json!({"name": "Alice", "age": 30, "active": true}));
        assert_eq!(canonize(&v), r#"{active:true;age:30;name:"Alice";}"#);
    }

    #[test]
    fn test_empty_composites() {
        assert_eq!(canonize(&Value::Sequence(vec![])), "[]");
        assert_eq!(canonize(&Value::Mapping(Map::new())), "{}");
    }

    #[test]
    fn test_undefined_participates_in_composites() {
        let v: Value = [("present", Value::from(1)), ("absent", Value::Undefined)]
            .into_iter()
            .collect();
        assert_eq!(canonize(&v), "{absent:undefined;present:1;}");

        let seq = Value::Sequence(vec![Value::Undefined]);
        assert_eq!(canonize(&seq), "[0:undefined;]");
    }

    #[test]
    fn test_unsupported_passes_through() {
        let v = Value::Unsupported("Date:2024-01-01T00:00:00.000Z".to_string());
        assert_eq!(canonize(&v), "Date:2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_key_sort_is_code_point_order() {
        // 'a' (0x61) < 'z' (0x7A) < 'é' (0xC3 0xA9 in UTF-8),
        // and lexicographically "1" < "10" < "2".
        let v = from_json(json!({"é": 1, "z": 2, "a": 3, "10": 4, "2": 5, "1": 6}));
        assert_eq!(canonize(&v), "{1:6;10:4;2:5;a:3;z:2;é:1;}");
    }

    #[test]
    fn test_canonize_serialize_matches_two_step() {
        let raw = json!({"b": [1, 2], "a": null});
        assert_eq!(
            canonize_serialize(&raw),
            canonize(&Value::from_serialize(&raw))
        );
    }
}

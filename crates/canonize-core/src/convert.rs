//! Boundary classification of host values
//!
//! Foreign values are converted into the closed [`Value`] variant exactly
//! once, before recursion begins. Conversions are total: nothing here
//! panics or returns an error. Values the model cannot express classify as
//! [`Value::Unsupported`].

use serde::Serialize;

use crate::number::Number;
use crate::value::{Map, Value};

impl Value {
    /// Classify any serde-serializable host value.
    ///
    /// Serialization failures (non-string map keys, failing `Serialize`
    /// impls) degrade to [`Value::Unsupported`] carrying the error text
    /// rather than crashing. That fallback string is best-effort only.
    ///
    /// ```
    /// use canonize_core::Value;
    /// use std::collections::HashMap;
    ///
    /// let ok = Value::from_serialize(&vec![1, 2, 3]);
    /// assert!(ok.is_composite());
    ///
    /// // Tuple keys cannot become string keys; this classifies as
    /// // Unsupported instead of failing.
    /// let weird: HashMap<(u8, u8), &str> = HashMap::from([((1, 2), "x")]);
    /// assert!(matches!(Value::from_serialize(&weird), Value::Unsupported(_)));
    /// ```
    pub fn from_serialize<T: Serialize>(value: &T) -> Value {
        match serde_json::to_value(value) {
            Ok(v) => Value::from(v),
            Err(err) => Value::Unsupported(err.to_string()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(Number::from_json(&n)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Mapping(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(Number::Int(i64::from(i)))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Int(i))
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Value::Number(Number::Int(i64::from(u)))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Number(Number::UInt(u))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(Number::Float(x))
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

/// `None` classifies as null, matching serde's serialization of options.
/// The absent marker is only ever constructed explicitly.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<Map> for Value {
    fn from(fields: Map) -> Self {
        Value::Mapping(fields)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Sequence(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Mapping(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

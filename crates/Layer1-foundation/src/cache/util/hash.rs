//! Stable cache keys
//!
//! Parameters are serialized to JSON with object keys sorted recursively, so
//! `{"a": 1, "b": 2}` and `{"b": 2, "a": 1}` produce the same key. Token trees
//! keep insertion order (`preserve_order`), which is why the sort has to be
//! explicit here rather than relying on the map type.

use serde::Serialize;
use serde_json::Value;

/// Derive a stable key for any serializable parameter value
///
/// Returns `None` when the value cannot be represented as JSON (for example a
/// map with non-string keys). Callers treat that as an uncacheable input.
pub fn stable_key<P: Serialize + ?Sized>(params: &P) -> Option<String> {
    let value = serde_json::to_value(params).ok()?;
    Some(canonical_json(&value))
}

/// Serialize a JSON value with object keys sorted at every depth
pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(obj) => {
            out.push('{');
            let mut keys: Vec<&String> = obj.keys().collect();
            keys.sort();
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                // Display on a string value yields the quoted, escaped form
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                if let Some(v) = obj.get(key) {
                    write_canonical(v, out);
                }
            }
            out.push('}');
        }
        Value::Array(arr) => {
            out.push('[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

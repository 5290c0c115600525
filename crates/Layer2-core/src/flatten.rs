//! Token tree flattening
//!
//! `{"colors": {"primary": {"500": "#0ea5e9"}}}` with prefix `ws` becomes
//! `--ws-colors-primary-500: #0ea5e9`. Traversal is depth-first in each
//! object's own key order; only string and number leaves produce variables.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// One CSS custom property
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlatVariable {
    /// Full property name including the leading `--`
    pub name: String,
    pub value: String,
}

impl FlatVariable {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// `name: value;`
    pub fn declaration(&self) -> String {
        format!("{}: {};", self.name, self.value)
    }
}

/// Flatten a token tree under `prefix`
///
/// A top-level value that is not an object yields no variables.
pub fn flatten_tokens(tokens: &Value, prefix: &str) -> Vec<FlatVariable> {
    let mut out = Vec::new();
    if let Value::Object(map) = tokens {
        let mut path = Vec::new();
        walk(map, prefix, &mut path, &mut out);
    }
    out
}

fn walk<'a>(
    map: &'a Map<String, Value>,
    prefix: &str,
    path: &mut Vec<&'a str>,
    out: &mut Vec<FlatVariable>,
) {
    for (key, value) in map {
        path.push(key);
        match value {
            Value::String(s) => out.push(FlatVariable::new(variable_name(prefix, path), s.clone())),
            Value::Number(n) => {
                out.push(FlatVariable::new(variable_name(prefix, path), format_number(n)))
            }
            Value::Object(child) => walk(child, prefix, path, out),
            // arrays, booleans, null
            _ => {}
        }
        path.pop();
    }
}

fn variable_name(prefix: &str, path: &[&str]) -> String {
    format!("--{}-{}", prefix, path.join("-"))
}

/// Decimal form of a JSON number; integral floats drop the fraction
pub fn format_number(n: &Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                return format!("{}", f as i64);
            }
            return format!("{}", f);
        }
    }
    n.to_string()
}

//! # Document Value Model
//!
//! Input files are YAML, but the schema engine walks a single value model:
//! `serde_json::Value`. This module converts a parsed `serde_yaml::Value`
//! into that model and names value shapes for type-error messages.
//!
//! YAML has a richer type system than the configuration documents need
//! (tags, non-string mapping keys, non-finite floats). The conversion
//! accepts the JSON-compatible subset and rejects the rest.

use serde_json::Value;
use thiserror::Error;

/// A YAML construct that cannot be represented in the document model.
#[derive(Debug, Error, PartialEq)]
pub enum ValueError {
    /// Non-finite floats have no JSON representation.
    #[error("cannot represent float {0} in a configuration document")]
    UnrepresentableFloat(f64),

    /// Mapping keys must be string-like (string, number, or bool).
    #[error("unsupported mapping key: {0}")]
    UnsupportedKey(String),

    /// An unrecognized YAML number representation.
    #[error("unsupported number: {0}")]
    UnsupportedNumber(String),
}

/// Convert a parsed YAML value into the JSON value model.
///
/// Number and bool mapping keys are coerced to strings; YAML tags are
/// ignored and the inner value converted.
pub fn yaml_to_json(yaml: &serde_yaml::Value) -> Result<Value, ValueError> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or(ValueError::UnrepresentableFloat(f))
            } else {
                Err(ValueError::UnsupportedNumber(n.to_string()))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, ValueError> = seq.iter().map(yaml_to_json).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(ValueError::UnsupportedKey(format!("{other:?}"))),
                };
                json_map.insert(key, yaml_to_json(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

/// Name a value's shape for "expected X but got Y" messages.
pub fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "map",
    }
}

//! # Rule Algebra — Schema Tree, Validation, Defaulting
//!
//! A schema is a tree of [`MapSchema`] nodes (each an ordered list of
//! [`Rule`]s) and [`ArraySchema`] nodes (a homogeneous sequence of maps).
//! Two operations walk a document against the tree:
//!
//! - [`Schema::validate`] — depth-first recursive descent. The innermost
//!   failure is created first; each enclosing level prepends its own frame
//!   (`At Config()`, `At key: ci`, ...), so the final trace reads from the
//!   document root down to the failure.
//! - [`Schema::apply_defaults`] — a structural mirror of validation that
//!   produces a normalized document: absent optional fields are filled
//!   with their static defaults, everything provided is kept verbatim.
//!   It assumes the document already validated and never fails.
//!
//! ## Unknown Keys
//!
//! Keys present in the input but not declared by a schema are tolerated by
//! validation and preserved by defaulting. Validation checks declared
//! invariants; it never rejects extra keys.
//!
//! ## Custom Rules
//!
//! A [`Rule::Custom`] holds a [`CustomCheck`] that receives the entire
//! enclosing map rather than a single field, for constraints that span
//! sibling subtrees. Custom rules run after every field rule of their map
//! has passed, and they see the fully defaulted view of the map, so
//! referential checks work on final values rather than absent-field gaps.

use hookci_core::{type_name, ValidationError};
use serde_json::{Map, Value};

use crate::check::Check;

/// A document-level constraint over a whole map.
///
/// Receives the map with this level's defaults already applied. Failures
/// are wrapped with the enclosing map's display frame but no field frame;
/// an implementation that wants to point at a specific location attaches
/// its own `At key: ...` frames.
pub trait CustomCheck: Send + Sync {
    /// Check the fully defaulted map.
    fn check(&self, map: &Map<String, Value>) -> Result<(), ValidationError>;
}

/// One field-level or map-level constraint within a [`MapSchema`].
pub enum Rule {
    /// The field must exist and pass the check.
    Required {
        /// Field name.
        key: &'static str,
        /// Predicate over the field's value.
        check: Check,
    },
    /// The field may be absent; defaulting fills it with `default`.
    Optional {
        /// Field name.
        key: &'static str,
        /// Predicate over the field's value, when present.
        check: Check,
        /// Value inserted by defaulting when the field is absent.
        default: Value,
    },
    /// The field may be absent; defaulting leaves it absent.
    OptionalNoDefault {
        /// Field name.
        key: &'static str,
        /// Predicate over the field's value, when present.
        check: Check,
    },
    /// The field must exist and validate against a nested schema.
    RequiredRecurse {
        /// Field name.
        key: &'static str,
        /// Schema for the field's value.
        schema: Schema,
    },
    /// As [`Rule::Optional`], but nested: the default (or the provided
    /// value) is itself run through the sub-schema's defaulting.
    OptionalRecurse {
        /// Field name.
        key: &'static str,
        /// Schema for the field's value.
        schema: Schema,
        /// Value defaulting starts from when the field is absent.
        default: Value,
    },
    /// A whole-map constraint, run after all field rules pass.
    Custom(Box<dyn CustomCheck>),
}

/// Expected shape of one document level.
pub enum Schema {
    /// A mapping with declared fields.
    Map(MapSchema),
    /// A sequence of mappings.
    Array(ArraySchema),
}

impl Schema {
    /// Validate a value against this schema node.
    pub fn validate(&self, v: &Value) -> Result<(), ValidationError> {
        match self {
            Schema::Map(map) => map.validate(v),
            Schema::Array(array) => array.validate(v),
        }
    }

    /// Produce the normalized (defaults-applied) form of a validated value.
    pub fn apply_defaults(&self, v: Value) -> Value {
        match self {
            Schema::Map(map) => map.apply_defaults(v),
            Schema::Array(array) => array.apply_defaults(v),
        }
    }
}

/// Declared shape of a mapping: a display name for error frames, an
/// optional key field shown when elements of an array are reported, and
/// an ordered list of rules.
pub struct MapSchema {
    name: &'static str,
    key_field: Option<&'static str>,
    rules: Vec<Rule>,
}

impl MapSchema {
    /// Build a map schema.
    ///
    /// `key_field` names the field whose value identifies one map among
    /// many in error frames, e.g. `At Hook(id="fmt")`; pass `None` for
    /// singleton maps, rendered as `At Config()`.
    pub fn new(name: &'static str, key_field: Option<&'static str>, rules: Vec<Rule>) -> Self {
        Self {
            name,
            key_field,
            rules,
        }
    }

    /// Validate a value against this map schema.
    ///
    /// Field rules run in declaration order, then custom rules against the
    /// defaulted view. The first failure wins and is wrapped with this
    /// map's display frame.
    pub fn validate(&self, v: &Value) -> Result<(), ValidationError> {
        let map = v.as_object().ok_or_else(|| {
            ValidationError::structural(format!(
                "expected a {} map but got {}",
                self.name,
                type_name(v)
            ))
        })?;

        let frame = self.frame(map);
        for rule in &self.rules {
            validate_rule(rule, map).map_err(|e| e.with_context(frame.clone()))?;
        }

        if self.has_custom_rules() {
            let defaulted = self.apply_defaults_map(map.clone());
            for rule in &self.rules {
                if let Rule::Custom(check) = rule {
                    check
                        .check(&defaulted)
                        .map_err(|e| e.with_context(frame.clone()))?;
                }
            }
        }
        Ok(())
    }

    /// Produce the normalized form of a validated value.
    ///
    /// Non-map input is returned unchanged; validation has already
    /// rejected it for callers that care.
    pub fn apply_defaults(&self, v: Value) -> Value {
        match v {
            Value::Object(map) => Value::Object(self.apply_defaults_map(map)),
            other => other,
        }
    }

    /// The defaulting pass over a map: provided values and unknown keys
    /// are kept verbatim, gaps are filled, nested schemas recurse.
    fn apply_defaults_map(&self, mut map: Map<String, Value>) -> Map<String, Value> {
        for rule in &self.rules {
            match rule {
                Rule::Required { .. } | Rule::OptionalNoDefault { .. } | Rule::Custom(_) => {}
                Rule::Optional { key, default, .. } => {
                    map.entry((*key).to_string())
                        .or_insert_with(|| default.clone());
                }
                Rule::RequiredRecurse { key, schema } => {
                    if let Some(v) = map.remove(*key) {
                        map.insert((*key).to_string(), schema.apply_defaults(v));
                    }
                }
                Rule::OptionalRecurse {
                    key,
                    schema,
                    default,
                } => {
                    let v = map.remove(*key).unwrap_or_else(|| default.clone());
                    map.insert((*key).to_string(), schema.apply_defaults(v));
                }
            }
        }
        map
    }

    fn has_custom_rules(&self) -> bool {
        self.rules.iter().any(|r| matches!(r, Rule::Custom(_)))
    }

    /// The display frame for this map: `At Config()`, or with the key
    /// field's value when one is configured, `At Hook(id="fmt")`.
    fn frame(&self, map: &Map<String, Value>) -> String {
        match self.key_field {
            None => format!("At {}()", self.name),
            Some(key) => match map.get(key) {
                Some(v) => format!("At {}({}={})", self.name, key, v),
                None => format!("At {}({}=MISSING)", self.name, key),
            },
        }
    }
}

/// A sequence whose every element must satisfy the wrapped map schema.
pub struct ArraySchema {
    of: MapSchema,
}

impl ArraySchema {
    /// Build an array schema over elements of `of`.
    pub fn new(of: MapSchema) -> Self {
        Self { of }
    }

    /// Validate a value: must be a sequence, elements checked in order,
    /// first failure wins.
    pub fn validate(&self, v: &Value) -> Result<(), ValidationError> {
        let items = v.as_array().ok_or_else(|| {
            ValidationError::structural(format!(
                "expected an array but got {}",
                type_name(v)
            ))
        })?;
        for item in items {
            self.of.validate(item)?;
        }
        Ok(())
    }

    /// Normalize every element.
    pub fn apply_defaults(&self, v: Value) -> Value {
        match v {
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| self.of.apply_defaults(item))
                    .collect(),
            ),
            other => other,
        }
    }
}

fn validate_rule(rule: &Rule, map: &Map<String, Value>) -> Result<(), ValidationError> {
    match rule {
        Rule::Required { key, check } => match map.get(*key) {
            None => Err(missing_key(key)),
            Some(v) => check.run(v).map_err(|e| e.with_context(key_frame(key))),
        },
        Rule::Optional { key, check, .. } | Rule::OptionalNoDefault { key, check } => {
            match map.get(*key) {
                None => Ok(()),
                Some(v) => check.run(v).map_err(|e| e.with_context(key_frame(key))),
            }
        }
        Rule::RequiredRecurse { key, schema } => match map.get(*key) {
            None => Err(missing_key(key)),
            Some(v) => schema.validate(v).map_err(|e| e.with_context(key_frame(key))),
        },
        Rule::OptionalRecurse { key, schema, .. } => match map.get(*key) {
            None => Ok(()),
            Some(v) => schema.validate(v).map_err(|e| e.with_context(key_frame(key))),
        },
        // Custom rules run after the field pass, against the defaulted map.
        Rule::Custom(_) => Ok(()),
    }
}

fn missing_key(key: &str) -> ValidationError {
    ValidationError::structural(format!("missing key: {key}"))
}

fn key_frame(key: &str) -> String {
    format!("At key: {key}")
}

//! # Field Predicates
//!
//! A [`Check`] is a pure predicate over a single document value. Checks
//! report failures as [`ValidationError`]s without location frames; the
//! rule that runs a check attaches the `At key: ...` frame, keeping the
//! predicate reusable at any position in the schema tree.
//!
//! The only exception is [`Check::array_of`], which frames each element
//! failure with its index (`At index 2`) before the field frame is added.

use hookci_core::{type_name, ValidationError};
use serde_json::Value;

/// A composable predicate over a single value.
///
/// Held as a boxed `Send + Sync` closure so schemas built from checks can
/// live in a shared process-wide constant.
pub struct Check(Box<dyn Fn(&Value) -> Result<(), ValidationError> + Send + Sync>);

impl Check {
    /// Wrap a free-form predicate.
    pub fn new(
        check: impl Fn(&Value) -> Result<(), ValidationError> + Send + Sync + 'static,
    ) -> Self {
        Self(Box::new(check))
    }

    /// The value must be a string.
    pub fn string() -> Self {
        Self::new(|v| match v {
            Value::String(_) => Ok(()),
            other => Err(ValidationError::structural(format!(
                "expected a string but got {}",
                type_name(other)
            ))),
        })
    }

    /// The value must be a bool.
    pub fn bool() -> Self {
        Self::new(|v| match v {
            Value::Bool(_) => Ok(()),
            other => Err(ValidationError::structural(format!(
                "expected a bool but got {}",
                type_name(other)
            ))),
        })
    }

    /// The value must be an array whose every element passes `inner`.
    ///
    /// Element failures are framed with their index.
    pub fn array_of(inner: Check) -> Self {
        Self::new(move |v| {
            let items = v.as_array().ok_or_else(|| {
                ValidationError::structural(format!(
                    "expected an array but got {}",
                    type_name(v)
                ))
            })?;
            for (i, item) in items.iter().enumerate() {
                inner
                    .run(item)
                    .map_err(|e| e.with_context(format!("At index {i}")))?;
            }
            Ok(())
        })
    }

    /// The value must equal one of the given choices.
    ///
    /// Choices are listed sorted in the failure message so the report is
    /// deterministic regardless of declaration order.
    pub fn one_of(choices: &'static [&'static str]) -> Self {
        Self::new(move |v| {
            if choices.iter().any(|choice| v.as_str() == Some(*choice)) {
                return Ok(());
            }
            let mut sorted: Vec<&str> = choices.to_vec();
            sorted.sort_unstable();
            Err(ValidationError::structural(format!(
                "expected one of {} but got: {v}",
                sorted.join(", ")
            )))
        })
    }

    /// Logical AND: `self` first, then `other`.
    ///
    /// Used to refine a type check, e.g. string AND non-empty.
    pub fn and(self, other: Check) -> Self {
        Self::new(move |v| {
            self.run(v)?;
            other.run(v)
        })
    }

    /// Run the predicate against a value.
    pub fn run(&self, v: &Value) -> Result<(), ValidationError> {
        (self.0)(v)
    }
}

//! # Validation Errors — Path-Traced Failures
//!
//! Defines [`ValidationError`], the single failure type produced when a
//! document does not satisfy its schema. An error carries a leaf message
//! and an ordered chain of context frames describing the exact nesting
//! path from the document root to the point of failure.
//!
//! ## Invariant
//!
//! Frames are stored and rendered in root-to-leaf order. The innermost
//! failure is created first; each enclosing level prepends its own frame
//! as the error propagates outward, so a trace always reads from the
//! document root down to the offending field.
//!
//! ## Rendering
//!
//! `Display` produces the multi-line block printed for each failing file:
//!
//! ```text
//! =====>
//! ==> File .pre-commit-config.yaml
//! ==> At Config()
//! ==> At key: ci
//! ==> At key: skip
//! =====> unexpected hook ids: identity
//! ```

use std::fmt;

/// Classifies what went wrong, independent of where.
///
/// Every failure is reported the same way; the kind exists so callers and
/// tests can distinguish a malformed input from a schema violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be read or parsed into a document at all.
    Parse,
    /// A declared field is missing, has the wrong type, or fails a predicate.
    Structural,
    /// A reference points at an identifier not declared in the document.
    CrossReference,
}

/// A validation failure with its location trace.
///
/// Construct with [`ValidationError::parse`], [`ValidationError::structural`],
/// or [`ValidationError::cross_reference`], then wrap with context frames
/// via [`ValidationError::with_context`] as it propagates outward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    kind: ErrorKind,
    context: Vec<String>,
    message: String,
}

impl ValidationError {
    /// A failure to read or parse the input document.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    /// A missing key, type mismatch, or failed field predicate.
    pub fn structural(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Structural, message)
    }

    /// A reference to an identifier the document does not declare.
    pub fn cross_reference(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CrossReference, message)
    }

    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            context: Vec::new(),
            message: message.into(),
        }
    }

    /// Prepend an enclosing context frame.
    ///
    /// Called by each enclosing schema level as the error propagates
    /// outward, keeping the stored trace in root-to-leaf order.
    #[must_use]
    pub fn with_context(mut self, frame: impl Into<String>) -> Self {
        self.context.insert(0, frame.into());
        self
    }

    /// What kind of failure this is.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The leaf message, without any location frames.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The context frames, root to leaf.
    pub fn context(&self) -> &[String] {
        &self.context
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=====>")?;
        for frame in &self.context {
            writeln!(f, "==> {frame}")?;
        }
        write!(f, "=====> {}", self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context_keeps_root_to_leaf_order() {
        let err = ValidationError::structural("string cannot be empty")
            .with_context("At key: autoupdate_commit_msg")
            .with_context("At CI()")
            .with_context("At key: ci")
            .with_context("At Config()");
        assert_eq!(
            err.context(),
            [
                "At Config()",
                "At key: ci",
                "At CI()",
                "At key: autoupdate_commit_msg",
            ]
        );
        assert_eq!(err.message(), "string cannot be empty");
    }

    #[test]
    fn test_display_block_format() {
        let err = ValidationError::cross_reference("unexpected hook ids: identity")
            .with_context("At key: skip")
            .with_context("At key: ci")
            .with_context("At Config()")
            .with_context("File cfg.yaml");
        assert_eq!(
            err.to_string(),
            "=====>\n\
             ==> File cfg.yaml\n\
             ==> At Config()\n\
             ==> At key: ci\n\
             ==> At key: skip\n\
             =====> unexpected hook ids: identity"
        );
    }

    #[test]
    fn test_display_without_frames() {
        let err = ValidationError::parse("missing.yaml is not a file");
        assert_eq!(err.to_string(), "=====>\n=====> missing.yaml is not a file");
    }

    #[test]
    fn test_kind_is_preserved_through_wrapping() {
        let err = ValidationError::parse("bad syntax").with_context("File x.yaml");
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}

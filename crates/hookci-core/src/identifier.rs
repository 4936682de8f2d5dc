//! # Hook Identifier Newtype
//!
//! Hooks are referenced by two kinds of name: the primary `id` and an
//! optional `alias`. Both live in the same namespace, so a single newtype
//! covers them. No bare strings for identifiers.

use std::fmt;

/// An identifier by which a hook can be referenced.
///
/// Ordered and hashable so sets of identifiers sort and dedup naturally,
/// which keeps cross-reference reports deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HookId(String);

impl HookId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

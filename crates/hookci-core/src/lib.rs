//! # hookci-core — Foundational Types for hookci
//!
//! Defines the types every other crate in the workspace builds on: the
//! validation error with its root-to-leaf context trace, the document value
//! model (YAML parsed into a JSON value tree), and the hook identifier
//! newtype.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `hookci-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identifier;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::{ErrorKind, ValidationError};
pub use identifier::HookId;
pub use value::{type_name, yaml_to_json, ValueError};

//! # hookci-schema — Declarative Schema Engine
//!
//! Validates hook-configuration documents against a declarative schema and
//! produces normalized, defaults-applied documents.
//!
//! ## Rule Algebra (`rules`)
//!
//! A schema is a tree of [`MapSchema`] and [`ArraySchema`] nodes. Each map
//! level declares an ordered list of [`Rule`]s: required fields, optional
//! fields with or without defaults, recursive sub-schemas, and custom
//! whole-map checks. Validation is a depth-first recursive descent that
//! wraps every failure with the frames of the levels it passed through, so
//! errors carry an exact root-to-leaf path trace.
//!
//! ## Field Predicates (`check`)
//!
//! Leaf validation is done by [`Check`] predicates: type checks, enumerated
//! choices, element-wise array checks, and free-form refinements, composable
//! via logical AND.
//!
//! ## The Configuration Schema (`config`)
//!
//! [`config::CONFIG_SCHEMA`] describes the recognized document shape:
//! `repos` (repositories and their hooks) and the optional `ci` options
//! block. One rule there is not expressible hierarchically: every entry in
//! `ci.skip` must reference a hook declared under `repos`, by id or alias.
//! That check closes over the whole document and runs after the structural
//! pass. [`config::load_config_file`] ties it together: read, parse,
//! validate, apply defaults.
//!
//! ## Thread Safety
//!
//! Schemas are immutable after construction and all rule state is
//! `Send + Sync`, so the process-wide schema constant can be shared freely.

pub mod check;
pub mod config;
pub mod rules;

pub use check::Check;
pub use config::{load_config_file, CONFIG_SCHEMA};
pub use hookci_core::{ErrorKind, ValidationError};
pub use rules::{ArraySchema, CustomCheck, MapSchema, Rule, Schema};

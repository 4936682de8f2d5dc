//! # The Hook-Configuration Schema
//!
//! The concrete schema for hook-configuration documents: `repos` (the
//! repositories and the hooks they declare) plus the optional `ci:` options
//! block, and the one rule the schema tree cannot express hierarchically —
//! every entry in `ci.skip` must reference a hook declared under `repos`,
//! by its primary `id` or its `alias`.
//!
//! The schema is built once into [`CONFIG_SCHEMA`] and shared read-only for
//! the life of the process.
//!
//! [`load_config_file`] is the whole pipeline for one input file: read,
//! parse YAML, convert into the document model, validate, apply defaults.

use std::collections::BTreeSet;
use std::path::Path;

use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};

use hookci_core::{yaml_to_json, HookId, ValidationError};

use crate::check::Check;
use crate::rules::{ArraySchema, CustomCheck, MapSchema, Rule, Schema};

/// Commit message used when the CI service pushes automatic fixes.
pub const DEFAULT_AUTOFIX_COMMIT_MSG: &str = "[pre-commit.ci] auto fixes \
     from pre-commit.com hooks\n\nfor more information, see \
     https://pre-commit.ci\n";

/// Commit message used for automatic hook updates.
pub const DEFAULT_AUTOUPDATE_COMMIT_MSG: &str =
    "[pre-commit.ci] pre-commit autoupdate";

/// The branch name the update service uses for its own pull requests.
/// Configurations cannot point `autoupdate_branch` at it.
pub const RESERVED_AUTOUPDATE_BRANCH: &str = "pre-commit-ci-update-config";

const AUTOUPDATE_SCHEDULES: &[&str] = &["weekly", "monthly", "quarterly"];

/// The process-wide schema for hook-configuration documents.
pub static CONFIG_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::Map(MapSchema::new(
        "Config",
        None,
        vec![
            // Validated first so the cross-reference rule can trust the
            // shape of every repo and hook entry.
            Rule::RequiredRecurse {
                key: "repos",
                schema: Schema::Array(ArraySchema::new(repository_schema())),
            },
            Rule::OptionalRecurse {
                key: "ci",
                schema: Schema::Map(ci_schema()),
                default: json!({}),
            },
            Rule::Custom(Box::new(SkipReferencesDeclaredHook)),
        ],
    ))
});

fn hook_schema() -> MapSchema {
    MapSchema::new(
        "Hook",
        Some("id"),
        vec![
            Rule::Required {
                key: "id",
                check: Check::string(),
            },
            Rule::OptionalNoDefault {
                key: "alias",
                check: Check::string(),
            },
        ],
    )
}

fn repository_schema() -> MapSchema {
    MapSchema::new(
        "Repository",
        Some("repo"),
        vec![
            Rule::Required {
                key: "repo",
                check: Check::string(),
            },
            Rule::RequiredRecurse {
                key: "hooks",
                schema: Schema::Array(ArraySchema::new(hook_schema())),
            },
        ],
    )
}

fn ci_schema() -> MapSchema {
    MapSchema::new(
        "CI",
        None,
        vec![
            Rule::Optional {
                key: "autofix_commit_msg",
                check: non_empty_string(),
                default: json!(DEFAULT_AUTOFIX_COMMIT_MSG),
            },
            Rule::Optional {
                key: "autofix_prs",
                check: Check::bool(),
                default: json!(true),
            },
            Rule::Optional {
                key: "autoupdate_branch",
                check: autoupdate_branch(),
                default: json!(""),
            },
            Rule::Optional {
                key: "autoupdate_commit_msg",
                check: non_empty_string(),
                default: json!(DEFAULT_AUTOUPDATE_COMMIT_MSG),
            },
            Rule::Optional {
                key: "autoupdate_schedule",
                check: Check::one_of(AUTOUPDATE_SCHEDULES),
                default: json!("weekly"),
            },
            Rule::Optional {
                key: "skip",
                check: Check::array_of(Check::string()),
                default: json!([]),
            },
            Rule::Optional {
                key: "submodules",
                check: Check::bool(),
                default: json!(false),
            },
        ],
    )
}

/// A string that may hold anything except the empty string.
fn non_empty_string() -> Check {
    Check::string().and(Check::new(|v| {
        if v.as_str() == Some("") {
            Err(ValidationError::structural("string cannot be empty"))
        } else {
            Ok(())
        }
    }))
}

/// Any branch name except [`RESERVED_AUTOUPDATE_BRANCH`].
fn autoupdate_branch() -> Check {
    Check::string().and(Check::new(|v| {
        if v.as_str() == Some(RESERVED_AUTOUPDATE_BRANCH) {
            Err(ValidationError::structural(format!(
                "autoupdate branch cannot be '{RESERVED_AUTOUPDATE_BRANCH}'"
            )))
        } else {
            Ok(())
        }
    }))
}

/// Every identifier in `ci.skip` must name a declared hook.
///
/// Declared identifiers are collected from sibling subtrees (`repos`), so
/// this cannot be a field rule; it closes over the whole document. Its
/// failure frames point at `ci.skip` — where the user must look — rather
/// than at where the rule is attached.
struct SkipReferencesDeclaredHook;

impl CustomCheck for SkipReferencesDeclaredHook {
    fn check(&self, map: &Map<String, Value>) -> Result<(), ValidationError> {
        let declared = declared_hook_ids(map);
        let skipped = skip_ids(map);
        let unexpected: Vec<&HookId> = skipped.difference(&declared).collect();
        if unexpected.is_empty() {
            return Ok(());
        }
        let joined = unexpected
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Err(
            ValidationError::cross_reference(format!("unexpected hook ids: {joined}"))
                .with_context("At key: skip")
                .with_context("At key: ci"),
        )
    }
}

/// Every identifier a hook can be referenced by: its `id` and, when
/// present, its `alias`, across all repository entries.
fn declared_hook_ids(map: &Map<String, Value>) -> BTreeSet<HookId> {
    let mut declared = BTreeSet::new();
    let repos = map.get("repos").and_then(Value::as_array);
    for repo in repos.into_iter().flatten() {
        let hooks = repo.get("hooks").and_then(Value::as_array);
        for hook in hooks.into_iter().flatten() {
            for key in ["id", "alias"] {
                if let Some(id) = hook.get(key).and_then(Value::as_str) {
                    declared.insert(HookId::new(id));
                }
            }
        }
    }
    declared
}

fn skip_ids(map: &Map<String, Value>) -> BTreeSet<HookId> {
    map.get("ci")
        .and_then(|ci| ci.get("skip"))
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .map(HookId::new)
        .collect()
}

/// Load, validate, and normalize one configuration file.
///
/// Every failure after the existence check carries a `File <path>` frame,
/// so printed traces always start with the offending file.
pub fn load_config_file(path: &Path) -> Result<Value, ValidationError> {
    if !path.is_file() {
        return Err(ValidationError::parse(format!(
            "{} is not a file",
            path.display()
        )));
    }
    let file_frame = format!("File {}", path.display());

    let content = std::fs::read_to_string(path)
        .map_err(|e| ValidationError::parse(e.to_string()).with_context(file_frame.clone()))?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
        .map_err(|e| ValidationError::parse(e.to_string()).with_context(file_frame.clone()))?;
    let document = yaml_to_json(&yaml)
        .map_err(|e| ValidationError::parse(e.to_string()).with_context(file_frame.clone()))?;

    CONFIG_SCHEMA
        .validate(&document)
        .map_err(|e| e.with_context(file_frame))?;
    Ok(CONFIG_SCHEMA.apply_defaults(document))
}

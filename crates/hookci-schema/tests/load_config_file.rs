//! Loader pipeline tests against real files: read, parse, validate,
//! normalize, with the `File <path>` frame on every post-existence failure.

use std::path::PathBuf;

use serde_json::json;

use hookci_schema::{load_config_file, ErrorKind};

fn write_config(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_valid_file_returns_the_normalized_document() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_config(
        &dir,
        "cfg.yaml",
        "ci:\n    skip: [identity]\nrepos:\n-   repo: meta\n    hooks:\n    -   id: identity\n",
    );
    let doc = load_config_file(&cfg).unwrap();
    assert_eq!(doc["ci"]["skip"], json!(["identity"]));
    // Gaps were filled by defaulting.
    assert_eq!(doc["ci"]["autofix_prs"], json!(true));
    assert_eq!(doc["ci"]["autoupdate_schedule"], json!("weekly"));
    assert_eq!(doc["repos"], json!([{"repo": "meta", "hooks": [{"id": "identity"}]}]));
}

#[test]
fn test_missing_file_has_no_frames() {
    let err = load_config_file(&PathBuf::from("nope/cfg.yaml")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.context().is_empty());
    assert_eq!(err.message(), "nope/cfg.yaml is not a file");
}

#[test]
fn test_directory_is_not_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config_file(dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(err.message(), format!("{} is not a file", dir.path().display()));
}

#[test]
fn test_yaml_syntax_error_is_a_parse_failure_with_file_frame() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_config(&dir, "cfg.yaml", "repos: [unclosed\n");
    let err = load_config_file(&cfg).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(err.context(), [format!("File {}", cfg.display())]);
}

#[test]
fn test_unsupported_yaml_key_is_a_parse_failure() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_config(&dir, "cfg.yaml", "? [a, b]\n: value\nrepos: []\n");
    let err = load_config_file(&cfg).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(err.context(), [format!("File {}", cfg.display())]);
}

#[test]
fn test_empty_document_fails_as_a_non_map() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_config(&dir, "cfg.yaml", "");
    let err = load_config_file(&cfg).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structural);
    assert_eq!(err.context(), [format!("File {}", cfg.display())]);
    assert_eq!(err.message(), "expected a Config map but got null");
}

#[test]
fn test_schema_failure_carries_the_file_frame_first() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = write_config(&dir, "cfg.yaml", "ci:\n    skip: [identity]\nrepos: []\n");
    let err = load_config_file(&cfg).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CrossReference);
    assert_eq!(
        err.context(),
        [
            format!("File {}", cfg.display()),
            "At Config()".to_string(),
            "At key: ci".to_string(),
            "At key: skip".to_string(),
        ]
    );
    assert_eq!(err.message(), "unexpected hook ids: identity");
}

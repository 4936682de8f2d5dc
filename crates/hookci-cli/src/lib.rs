//! # hookci-cli — Command-Line Interface for hookci
//!
//! Provides the `hookci` binary: validate zero or more hook-configuration
//! files against the process-wide schema.
//!
//! ```bash
//! hookci .pre-commit-config.yaml other-config.yaml
//! ```
//!
//! Each failing file prints its trace block to stdout; diagnostics go to
//! stderr under `RUST_LOG` control. The exit status aggregates across all
//! files: 0 only when every file validates.

use std::path::PathBuf;

use hookci_schema::load_config_file;

/// Validate every file in sequence.
///
/// A failing file prints its trace block and marks the run as failed, but
/// never stops the remaining files from being processed.
///
/// Returns the process exit code: 0 when every file validated, 1 otherwise.
pub fn run(filenames: &[PathBuf]) -> u8 {
    let mut retv = 0;
    for filename in filenames {
        match load_config_file(filename) {
            Ok(_) => {
                tracing::debug!(file = %filename.display(), "configuration ok");
            }
            Err(e) => {
                println!("{e}");
                retv = 1;
            }
        }
    }
    retv
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_no_files_is_a_clean_run() {
        assert_eq!(run(&[]), 0);
    }

    #[test]
    fn test_valid_file_passes() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = write_config(
            &dir,
            "cfg.yaml",
            "ci:\n    skip: [identity]\nrepos:\n-   repo: meta\n    hooks:\n    -   id: identity\n",
        );
        assert_eq!(run(&[cfg]), 0);
    }

    #[test]
    fn test_failing_file_sets_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = write_config(&dir, "cfg.yaml", "ci:\n    skip: [identity]\nrepos: []\n");
        assert_eq!(run(&[cfg]), 1);
    }

    #[test]
    fn test_one_failure_does_not_stop_later_files() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write_config(&dir, "bad.yaml", "repos: {}\n");
        let good = write_config(&dir, "good.yaml", "repos: []\n");
        let missing = dir.path().join("missing.yaml");
        assert_eq!(run(&[bad, missing, good.clone()]), 1);
        // The good file on its own still passes.
        assert_eq!(run(&[good]), 0);
    }
}

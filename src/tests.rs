#[cfg(test)]
mod tests {
    use crate::builders::reporter::ConsoleReporter;
    use crate::core::config::{GuardConfig, SENTINEL_CONFIG_FILE};
    use crate::core::engine::{GuardEngine, RunOutcome};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::{TempDir, tempdir};

    fn setup_files(files: &[(&str, &[u8])]) -> (TempDir, Vec<PathBuf>) {
        let dir = tempdir().unwrap();
        let paths = files
            .iter()
            .map(|(name, content)| {
                let path = dir.path().join(name);
                fs::write(&path, content).unwrap();
                path
            })
            .collect();
        (dir, paths)
    }

    fn run(paths: &[PathBuf], patterns: &[&str]) -> (RunOutcome, String) {
        let config = GuardConfig::new(paths.iter().map(|p| p.as_os_str()), patterns.iter());
        let mut reporter = ConsoleReporter::new(Vec::new());
        let outcome = GuardEngine::new(config).run(&mut reporter).unwrap();
        (outcome, String::from_utf8(reporter.into_inner()).unwrap())
    }

    fn line(path: &Path, suffix: &str) -> String {
        format!("{} {}\n", path.display(), suffix)
    }

    #[test]
    fn test_mixed_files() {
        let (_dir, paths) = setup_files(&[
            ("a.txt", b"hello world"),
            ("b.txt", b"TODO secret"),
        ]);

        let (outcome, out) = run(&paths, &["secret"]);
        assert_eq!(outcome, RunOutcome::Failed);
        assert_eq!(
            out,
            line(&paths[0], "ok") + &line(&paths[1], "contains forbidden pattern")
        );
    }

    #[test]
    fn test_no_patterns_passes() {
        let (_dir, paths) = setup_files(&[("a.txt", b"hello")]);

        let (outcome, out) = run(&paths, &[]);
        assert_eq!(outcome, RunOutcome::Passed);
        assert_eq!(out, line(&paths[0], "ok"));
    }

    #[test]
    fn test_unreadable_file_does_not_stop_scan() {
        let (_dir, paths) = setup_files(&[
            ("blob.bin", &[0xc3, 0x28, 0xff]),
            ("clean.txt", b"nothing to see"),
        ]);

        let (outcome, out) = run(&paths, &["secret"]);
        assert_eq!(outcome, RunOutcome::Failed);
        assert_eq!(
            out,
            line(&paths[0], "could not be read") + &line(&paths[1], "ok")
        );
    }

    #[test]
    fn test_sentinel_config_is_exempt() {
        let (_dir, paths) = setup_files(&[(SENTINEL_CONFIG_FILE, b"- id: secret\n")]);

        let (outcome, out) = run(&paths, &["secret", "id"]);
        assert_eq!(outcome, RunOutcome::Passed);
        assert_eq!(out, line(&paths[0], "ok"));
    }

    #[test]
    fn test_invalid_pattern_scans_nothing() {
        let (_dir, paths) = setup_files(&[("b.txt", b"TODO secret")]);

        let (outcome, out) = run(&paths, &["secret", "("]);
        assert_eq!(outcome, RunOutcome::Rejected);
        assert_eq!(out, "Pattern ( is not a valid regex: unclosed group\n");
    }

    #[test]
    fn test_missing_path_scans_nothing() {
        let (dir, mut paths) = setup_files(&[("a.txt", b"secret")]);
        let missing = dir.path().join("missing.txt");
        paths.push(missing.clone());

        let (outcome, out) = run(&paths, &["secret"]);
        assert_eq!(outcome, RunOutcome::Rejected);
        assert_eq!(out, format!("Path {} does not exist\n", missing.display()));
    }

    #[test]
    fn test_repeat_runs_are_identical() {
        let (_dir, paths) = setup_files(&[
            ("a.txt", b"fine"),
            ("b.txt", b"password=hunter2"),
        ]);

        let first = run(&paths, &[r"password\s*="]);
        let second = run(&paths, &[r"password\s*="]);
        assert_eq!(first, second);
        assert_eq!(first.0, RunOutcome::Failed);
    }
}

use std::ffi::OsString;

/// Base name of the hook runner's own configuration file. It routinely lists
/// the forbidden patterns verbatim, so it is never scanned.
pub const SENTINEL_CONFIG_FILE: &str = ".pre-commit-config.yaml";

/// The raw, unvalidated inputs of a single run.
///
/// Values are kept as `OsString` so that non-UTF-8 arguments reach the
/// validator instead of being rejected by the argument parser.
#[derive(Debug, Clone, Default)]
pub struct GuardConfig {
    /// File paths in the order the hook runner passed them.
    pub files: Vec<OsString>,
    /// Forbidden pattern sources in the order they were given.
    pub patterns: Vec<OsString>,
}

impl GuardConfig {
    pub fn new<F, P>(files: F, patterns: P) -> Self
    where
        F: IntoIterator,
        F::Item: Into<OsString>,
        P: IntoIterator,
        P::Item: Into<OsString>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }
}

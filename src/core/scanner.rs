use log::debug;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::builders::patterns::PatternMatcher;
use crate::core::config::SENTINEL_CONFIG_FILE;

/// The outcome of checking one file against the whole pattern set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanResult {
    /// No pattern matched, or the file is exempt.
    Ok,
    /// The file could not be read or is not valid UTF-8 text.
    ReadError,
    /// At least one forbidden pattern matched.
    PatternFound,
}

impl ScanResult {
    /// Whether this result marks the run as failed.
    pub fn is_failure(self) -> bool {
        !matches!(self, ScanResult::Ok)
    }
}

impl fmt::Display for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanResult::Ok => write!(f, "ok"),
            ScanResult::ReadError => write!(f, "could not be read"),
            ScanResult::PatternFound => write!(f, "contains forbidden pattern"),
        }
    }
}

/// Returns `true` for the hook runner's configuration file.
pub fn is_exempt(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name == SENTINEL_CONFIG_FILE)
}

/// Classifies a single file.
///
/// The exempt configuration file is `Ok` without being opened. Any other file
/// is read whole; a failed read or invalid UTF-8 gives `ReadError` with no
/// retry. Patterns are tried in order and the first hit short-circuits.
pub fn classify<M: PatternMatcher>(path: &Path, patterns: &[M]) -> ScanResult {
    if is_exempt(path) {
        debug!("Skipping {} (hook runner configuration)", path.display());
        return ScanResult::Ok;
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!("Failed to read {}: {e}", path.display());
            return ScanResult::ReadError;
        }
    };

    if patterns.iter().any(|pattern| pattern.is_present_in(&content)) {
        ScanResult::PatternFound
    } else {
        ScanResult::Ok
    }
}

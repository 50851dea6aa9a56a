use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while validating the command-line inputs.
///
/// Each variant renders as the single line printed before the run stops.
/// Per-file read failures are not represented here: they are reported as
/// `ScanResult::ReadError` and never abort a run.
#[derive(Error, Debug)]
pub enum GuardError {
    /// The path list is empty; at least one file must be supplied.
    #[error("At least one file path is required")]
    InvalidInputShape,

    /// A path argument is empty and cannot name a file.
    #[error("Path must be a non-empty path")]
    NotAPath,

    #[error("Path {} does not exist", .0.display())]
    PathNotFound(PathBuf),

    /// The path exists but is a directory or some other non-regular entry.
    #[error("Path {} is not a file", .0.display())]
    NotARegularFile(PathBuf),

    /// A pattern argument is not valid UTF-8.
    #[error("Pattern must be a string")]
    NotAString,

    /// `reason` is the one-line form of `source`; the full regex diagnostic
    /// spans several lines and stays reachable through the error chain.
    #[error("Pattern {pattern} is not a valid regex: {reason}")]
    InvalidPattern {
        pattern: String,
        reason: String,
        #[source]
        source: regex::Error,
    },
}

impl GuardError {
    pub fn invalid_pattern(pattern: &str, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: one_line_reason(&source),
            source,
        }
    }
}

/// Keeps the last `error: ...` line of a multi-line regex parse diagnostic.
fn one_line_reason(source: &regex::Error) -> String {
    let text = source.to_string();
    let last = text.lines().rev().map(str::trim).find(|line| !line.is_empty());
    match last {
        Some(line) => line.strip_prefix("error: ").unwrap_or(line).to_string(),
        None => text.clone(),
    }
}

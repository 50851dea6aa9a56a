use log::debug;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::builders::patterns::ForbiddenPattern;
use crate::core::error::GuardError;

/// The `InputValidator` trait defines the public interface for turning raw
/// command-line inputs into validated, ready-to-scan values.
///
/// Both operations are all-or-nothing: the first bad element aborts the batch
/// and is the only failure reported.
pub trait InputValidator {
    /// Confirms that every path exists and is a regular file.
    ///
    /// # Arguments
    /// * `raw`: The path arguments in the order they were supplied.
    ///
    /// # Returns
    /// The same paths, in order, or the first `GuardError` encountered.
    fn validate_paths(&self, raw: &[OsString]) -> Result<Vec<PathBuf>, GuardError>;

    /// Compiles every pattern source eagerly.
    ///
    /// # Arguments
    /// * `raw`: The pattern sources in the order they were supplied.
    ///
    /// # Returns
    /// The compiled patterns, in order, or the first `GuardError` encountered.
    fn validate_patterns(&self, raw: &[OsString]) -> Result<Vec<ForbiddenPattern>, GuardError>;
}

/// The `StandardValidator` is the concrete `InputValidator` used by the CLI.
///
/// It only performs read-only filesystem queries and regex compilation.
#[derive(Debug, Default)]
pub struct StandardValidator;

impl StandardValidator {
    pub fn new() -> Self {
        Self
    }

    /// Checks a single path. Existence is checked before the file type so a
    /// missing path is never reported as "not a file".
    fn check_path(&self, path: &Path) -> Result<(), GuardError> {
        if path.as_os_str().is_empty() {
            return Err(GuardError::NotAPath);
        }

        // Follows symlinks: a link to a regular file is accepted.
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(_) => return Err(GuardError::PathNotFound(path.to_path_buf())),
        };

        if !metadata.is_file() {
            return Err(GuardError::NotARegularFile(path.to_path_buf()));
        }

        Ok(())
    }
}

impl InputValidator for StandardValidator {
    fn validate_paths(&self, raw: &[OsString]) -> Result<Vec<PathBuf>, GuardError> {
        if raw.is_empty() {
            return Err(GuardError::InvalidInputShape);
        }

        let mut paths = Vec::with_capacity(raw.len());
        for arg in raw {
            let path = PathBuf::from(arg);
            self.check_path(&path)?;
            paths.push(path);
        }

        Ok(paths)
    }

    fn validate_patterns(&self, raw: &[OsString]) -> Result<Vec<ForbiddenPattern>, GuardError> {
        let mut patterns = Vec::with_capacity(raw.len());
        for arg in raw {
            let source = arg.to_str().ok_or(GuardError::NotAString)?;
            let pattern = ForbiddenPattern::compile(source)?;
            debug!("Compiled forbidden pattern {pattern}");
            patterns.push(pattern);
        }

        Ok(patterns)
    }
}

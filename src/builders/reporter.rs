use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::core::error::GuardError;
use crate::core::scanner::ScanResult;

/// Turns run events into the human-readable lines a hook runner shows.
///
/// The exit status is the machine-readable signal; these lines are for people.
pub trait StatusReporter {
    /// Writes the single status line for one scanned file.
    fn report(&mut self, path: &Path, result: ScanResult) -> Result<()>;

    /// Writes the single line describing why validation stopped the run.
    fn report_error(&mut self, error: &GuardError) -> Result<()>;
}

/// A `StatusReporter` that writes plain lines to any `Write` sink,
/// usually standard output.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying sink, e.g. to inspect a buffer in tests.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Formats `<path> <status>`, with the path shown as it was given.
    fn format_file_status(&self, path: &Path, result: ScanResult) -> String {
        format!("{} {}", path.display(), result)
    }
}

impl<W: Write> StatusReporter for ConsoleReporter<W> {
    fn report(&mut self, path: &Path, result: ScanResult) -> Result<()> {
        let line = self.format_file_status(path, result);
        writeln!(self.out, "{line}").context("Failed to write status line")?;
        Ok(())
    }

    fn report_error(&mut self, error: &GuardError) -> Result<()> {
        writeln!(self.out, "{error}").context("Failed to write validation error")?;
        Ok(())
    }
}

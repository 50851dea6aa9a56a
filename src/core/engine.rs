use anyhow::Result;
use log::{debug, info};

use crate::builders::reporter::StatusReporter;
use crate::builders::validator::{InputValidator, StandardValidator};
use crate::core::config::GuardConfig;
use crate::core::scanner;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every file resolved to `ok`.
    Passed,
    /// At least one file could not be read or contained a forbidden pattern.
    Failed,
    /// Validation stopped the run before any file was scanned.
    Rejected,
}

impl RunOutcome {
    /// Process exit status for this outcome. Rejected inputs fail the gate too.
    pub fn exit_code(self) -> u8 {
        match self {
            RunOutcome::Passed => 0,
            RunOutcome::Failed | RunOutcome::Rejected => 1,
        }
    }
}

/// Drives one run: validate everything, then scan each file in order.
pub struct GuardEngine {
    config: GuardConfig,
    validator: StandardValidator,
}

impl GuardEngine {
    pub fn new(config: GuardConfig) -> Self {
        Self {
            config,
            validator: StandardValidator::new(),
        }
    }

    /// Runs the guard, writing one line per file (or one validation line) to
    /// `reporter`.
    ///
    /// Paths are validated before patterns; the first validation failure is
    /// reported and nothing is scanned. Otherwise every file is scanned even
    /// after a failure, so the output always covers the full input list.
    ///
    /// # Errors
    /// Only fails if the reporter cannot write its output.
    pub fn run(&self, reporter: &mut dyn StatusReporter) -> Result<RunOutcome> {
        let validated = self
            .validator
            .validate_paths(&self.config.files)
            .and_then(|paths| {
                let patterns = self.validator.validate_patterns(&self.config.patterns)?;
                Ok((paths, patterns))
            });

        let (paths, patterns) = match validated {
            Ok(inputs) => inputs,
            Err(e) => {
                debug!("Input validation failed: {e:?}");
                reporter.report_error(&e)?;
                return Ok(RunOutcome::Rejected);
            }
        };

        let mut failed = false;
        for path in &paths {
            let result = scanner::classify(path, &patterns);
            debug!("{} -> {:?}", path.display(), result);
            reporter.report(path, result)?;
            failed |= result.is_failure();
        }

        let outcome = if failed {
            RunOutcome::Failed
        } else {
            RunOutcome::Passed
        };
        info!(
            "Checked {} file(s) against {} pattern(s): {:?}",
            paths.len(),
            patterns.len(),
            outcome
        );
        Ok(outcome)
    }
}

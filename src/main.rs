//! A pre-commit gate: fail the commit when any staged file contains a
//! forbidden pattern. The hook runner hands us the staged paths and the
//! patterns from its own configuration; we print one line per file and let
//! the exit status decide whether the commit goes through.
use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use prevent_file_content::builders::reporter::ConsoleReporter;
use prevent_file_content::core::config::GuardConfig;
use prevent_file_content::core::engine::GuardEngine;
use prevent_file_content::utils;

#[derive(Parser)]
#[command(name = "prevent-file-content", version)]
#[command(about = "Fail when files contain forbidden regex patterns")]
struct Cli {
    /// Files to check for forbidden patterns
    #[arg(value_name = "FILENAME", required = true, num_args = 1..)]
    filename: Vec<OsString>,

    /// Pattern to prevent in files, can be specified multiple times
    #[arg(short = 'p', long = "pattern", value_name = "REGEX")]
    pattern: Vec<OsString>,
}

impl From<Cli> for GuardConfig {
    fn from(cli: Cli) -> Self {
        GuardConfig::new(cli.filename, cli.pattern)
    }
}

fn main() -> Result<ExitCode> {
    utils::init_logger();
    let cli = Cli::parse();

    let engine = GuardEngine::new(cli.into());
    let stdout = io::stdout();
    let mut reporter = ConsoleReporter::new(stdout.lock());
    let outcome = engine.run(&mut reporter)?;

    Ok(ExitCode::from(outcome.exit_code()))
}

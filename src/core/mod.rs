// This file is the module declaration file for the `core` module.
// It holds the run-level pieces: inputs, errors, the per-file scanner and the
// engine that ties them together.

// `config` module:
// The raw inputs of a run (`GuardConfig`) and the name of the hook runner's
// configuration file, which is exempt from scanning.
pub mod config;

// `engine` module:
// `GuardEngine` validates all inputs up front, scans each file in order and
// folds the per-file results into a single `RunOutcome`.
pub mod engine;

// `error` module:
// `GuardError`, the validation failures that stop a run before scanning.
pub mod error;

// `scanner` module:
// Classifies one file against the compiled pattern set as ok, read error,
// or pattern found.
pub mod scanner;

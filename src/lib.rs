//! Checks staged files for forbidden content before they are committed.
//!
//! A hook runner passes the file list and one or more regex patterns; each
//! file is reported as ok, unreadable, or containing a forbidden pattern,
//! and any non-ok file fails the run.
pub mod builders;
pub mod core;
pub mod utils;

mod tests;

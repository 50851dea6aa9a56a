// This file is the module declaration file for the `builders` module.
// It declares and makes public all the sub-modules within the `src/builders`
// directory. These modules turn raw inputs into checked values and checked
// results into output.

// The `pub mod patterns;` declaration exposes the `patterns` module.
//
// `patterns` module:
// Defines `ForbiddenPattern`, a regex compiled once per run, and the
// `PatternMatcher` trait the scanner uses to test file content against it.
pub mod patterns;

// The `pub mod reporter;` declaration exposes the `reporter` module.
//
// `reporter` module:
// Defines the `StatusReporter` trait and its `ConsoleReporter`
// implementation, which prints one line per file or a single validation
// error line.
pub mod reporter;

// The `pub mod validator;` declaration exposes the `validator` module.
//
// `validator` module:
// Defines the `InputValidator` trait and the `StandardValidator`
// implementation. It checks that every path is an existing regular file and
// that every pattern compiles, failing fast on the first bad input.
pub mod validator;

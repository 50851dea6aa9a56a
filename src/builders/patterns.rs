use regex::Regex;
use std::fmt;

use crate::core::error::GuardError;

/// The `PatternMatcher` trait defines how a forbidden pattern is checked
/// against file content.
///
/// The scanner only needs a yes/no answer per pattern, so implementors never
/// report where or how often the pattern occurred.
pub trait PatternMatcher {
    /// Returns `true` if the pattern matches anywhere in `content`.
    fn is_present_in(&self, content: &str) -> bool;
}

/// A forbidden pattern compiled once and reused, read-only, for every file.
#[derive(Debug, Clone)]
pub struct ForbiddenPattern {
    /// The pattern exactly as it was supplied on the command line.
    pub specification: String,
    regex: Regex,
}

impl ForbiddenPattern {
    /// Compiles `specification` as a regular expression.
    ///
    /// The source is interpreted as regex syntax, not as a literal string, so
    /// metacharacters keep their meaning. Matching is case-sensitive unless the
    /// pattern itself opts out (e.g. with `(?i)`).
    ///
    /// # Errors
    /// Returns `GuardError::InvalidPattern` carrying the regex syntax error.
    pub fn compile(specification: &str) -> Result<Self, GuardError> {
        let regex = Regex::new(specification)
            .map_err(|source| GuardError::invalid_pattern(specification, source))?;

        Ok(Self {
            specification: specification.to_string(),
            regex,
        })
    }
}

impl PatternMatcher for ForbiddenPattern {
    fn is_present_in(&self, content: &str) -> bool {
        // Unanchored search: a hit on any substring counts.
        self.regex.is_match(content)
    }
}

impl fmt::Display for ForbiddenPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.specification)
    }
}

//! Anchored structural patterns.
//!
//! Patterns are compile-time literals, compiled once per process. A pattern
//! that fails to compile is logged and then matches nothing, so the
//! affected jurisdiction rejects every number instead of panicking.

use regex::Regex;

pub(crate) fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::warn!(pattern, error = %err, "structural pattern failed to compile");
            None
        }
    }
}

pub(crate) fn is_match(re: &Option<Regex>, value: &str) -> bool {
    re.as_ref().is_some_and(|re| re.is_match(value))
}

//! Final whitespace pass.
//!
//! Earlier rules are allowed to be sloppy about vertical spacing — the
//! heading rule deliberately appends an extra newline — because this pass
//! runs last and establishes the two output invariants: no run of three or
//! more newlines survives, and the whole result is trimmed.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Collapse 3+ consecutive newlines to exactly two and trim the result.
pub fn tidy(input: &str) -> String {
    RE_BLANK_RUNS.replace_all(input, "\n\n").trim().to_string()
}

//! Bold and italic rules.
//!
//! Bold must always run first. `**bold**` contains two single-delimiter
//! pairs, so the italic pattern would happily consume half of it and leave
//! stray asterisks behind. Once bold spans are gone, anything that still
//! matches a single-delimiter pair really is italic.
//!
//! Matching is non-greedy so adjacent spans on one line are handled
//! independently: `**a** and **b**` is two bold spans, not one giant span
//! from the first `**` to the last.

use super::RenderMode;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RE_BOLD_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static RE_BOLD_UNDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());

static RE_ITALIC_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static RE_ITALIC_UNDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"_(.+?)_").unwrap());

/// Rewrite `**text**` / `__text__` spans.
///
/// Plain mode shouts the text in uppercase; PDF mode wraps it in a `<b>`
/// tag pair for the layout engine.
pub fn rewrite_bold(input: &str, mode: RenderMode) -> String {
    let rewrite = |caps: &Captures<'_>| match mode {
        RenderMode::Plain => caps[1].to_uppercase(),
        RenderMode::Pdf => format!("<b>{}</b>", &caps[1]),
    };
    let s = RE_BOLD_STAR.replace_all(input, rewrite);
    RE_BOLD_UNDER.replace_all(&s, rewrite).to_string()
}

/// Strip `*text*` / `_text_` delimiters, keeping the text verbatim.
///
/// Identical in both modes: neither uppercase nor markup, the emphasis is
/// simply dropped. Apply only after [`rewrite_bold`].
pub fn strip_italic(input: &str) -> String {
    let s = RE_ITALIC_STAR.replace_all(input, "$1");
    RE_ITALIC_UNDER.replace_all(&s, "$1").to_string()
}

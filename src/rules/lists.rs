//! Line-start rules: unordered bullets, numbered lists, blockquotes.
//!
//! Only unordered markers are rewritten. Numbered lists and blockquotes
//! both pass through verbatim, but for different reasons documented on
//! their functions below.

use once_cell::sync::Lazy;
use regex::Regex;

// Marker must sit at line start and be followed by a space. Emphasis
// markers are never immediately followed by a space before their content,
// so this anchoring alone disambiguates `* item` from `*italic*` even
// though both start with an asterisk.
static RE_BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[-*+] (.+)$").unwrap());

/// Replace `-`/`*`/`+` list markers with a `•` glyph.
pub fn bullet_unordered(input: &str) -> String {
    RE_BULLET.replace_all(input, "• $1").to_string()
}

// Numbered lists (`1. `, `2. `, … at line start) have no rule on purpose:
// the numbering carries sequence meaning (steps, priorities) and must
// survive verbatim, never downgraded to bullets.

/// Pass blockquote lines (`> text`) through unchanged.
///
/// An identity stage: it exists so the pipeline's ordering records that
/// `>` lines are exempt from every other line-start rewrite. Removing it
/// would not change the output today, but it marks the seam where a
/// future quote treatment would slot in.
pub fn preserve_blockquotes(input: &str) -> String {
    input.to_string()
}

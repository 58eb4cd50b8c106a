//! Rewrite rules for flattening markdown.
//!
//! Each submodule implements one stage of the pipeline. Keeping stages
//! separate makes each independently testable and lets a new rule be
//! inserted at a specific position without touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! headings ──▶ bold ──▶ italic ──▶ bullets ──▶ links ──▶ code ──▶ quotes ──▶ whitespace
//! (# strip)   (UPPER    (strip     (• glyph)  (text+url  (strip   (pass      (collapse
//!              or <b>)   markers)              or text)   ticks)   through)   + trim)
//! ```
//!
//! ## Rule Order
//!
//! The order is load-bearing. Bold must be consumed before italic so a
//! `**bold**` span is never half-eaten by the single-delimiter italic rule,
//! and links must be rewritten before anything that would disturb brackets
//! or parentheses. Numbered lists have no stage at all: `1. ` prefixes carry
//! sequence meaning and pass through verbatim (see [`lists`]).
//!
//! Every stage is a pure `&str → String` function with no shared state.
//! None of them can fail; a pattern that matches nothing simply performs
//! zero substitutions.

pub mod emphasis;
pub mod headings;
pub mod links;
pub mod lists;
pub mod whitespace;

use crate::error::RenderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the two output representations to produce.
///
/// Both modes share the same rule skeleton and diverge at exactly two
/// points: emphasis rendering (uppercase vs. `<b>` tags) and link
/// rendering (keep the URL vs. drop it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Uppercase emphasis, links as `text (url)`. For copy/paste targets
    /// where markup would be lost but URLs must survive.
    Plain,
    /// `<b>…</b>` emphasis, links as bare text. For a downstream
    /// paragraph-layout engine that renders inline markup visually.
    Pdf,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Plain => f.write_str("plain"),
            RenderMode::Pdf => f.write_str("pdf"),
        }
    }
}

impl FromStr for RenderMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "text" => Ok(RenderMode::Plain),
            "pdf" => Ok(RenderMode::Pdf),
            other => Err(RenderError::UnknownMode(other.to_string())),
        }
    }
}

/// Run the full ordered pipeline over `input`.
///
/// Total over all string inputs: malformed or unterminated delimiters pass
/// through with their characters left in place, and empty or whitespace-only
/// input produces an empty string.
pub fn apply(input: &str, mode: RenderMode) -> String {
    let s = headings::flatten(input, mode);
    let s = emphasis::rewrite_bold(&s, mode);
    let s = emphasis::strip_italic(&s);
    let s = lists::bullet_unordered(&s);
    let s = links::rewrite_links(&s, mode);
    let s = links::strip_inline_code(&s);
    let s = lists::preserve_blockquotes(&s);
    whitespace::tidy(&s)
}

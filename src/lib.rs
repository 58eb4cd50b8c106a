//! # mdflat
//!
//! Flatten a narrow, well-known subset of markdown into two divergent
//! renderings from a single input: copy-ready plain text and PDF-markup
//! text for a downstream page-layout engine.
//!
//! ## Why this crate?
//!
//! Summarizer output arrives as markdown, but the two places it ends up
//! cannot use markdown. Copy/paste targets (email, chat, plain editors)
//! lose all markup — so emphasis becomes UPPERCASE and link URLs are kept
//! inline where they stay usable. PDF paragraph layout renders visually —
//! so emphasis becomes `<b>` tags the layout engine understands and bare
//! URLs are dropped as noise. One engine, one rule pipeline, two modes.
//!
//! This is deliberately *not* a CommonMark parser: it is a fixed, ordered
//! sequence of pattern substitutions tuned to headers, bold, italic,
//! bullets, numbered lists, links, inline code, and blockquotes. Inputs
//! outside that subset pass through untouched; nothing ever fails.
//!
//! ## Pipeline Overview
//!
//! ```text
//! markdown
//!  │
//!  ├─ 1. headings    strip #, uppercase (plain only), add breathing room
//!  ├─ 2. bold        **x** → X  (plain)  /  <b>x</b>  (pdf)
//!  ├─ 3. italic      *x* → x, both modes
//!  ├─ 4. bullets     -/*/+ → • glyph; numbered lists untouched
//!  ├─ 5. links       [t](u) → t (u)  (plain)  /  t  (pdf)
//!  ├─ 6. code        `x` → x
//!  ├─ 7. quotes      > x passes through
//!  └─ 8. whitespace  collapse 3+ newlines to 2, trim
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use mdflat::{to_plain_text, to_pdf_text};
//!
//! let md = "## Standup ##\n- ship the **fix**\n1. review [PR](https://example.com/42)";
//!
//! let plain = to_plain_text(md);
//! assert!(plain.contains("STANDUP"));
//! assert!(plain.contains("• ship the FIX"));
//! assert!(plain.contains("1. review PR (https://example.com/42)"));
//!
//! let pdf = to_pdf_text(md);
//! assert!(pdf.contains("Standup"));
//! assert!(pdf.contains("<b>fix</b>"));
//! assert!(pdf.contains("1. review PR"));
//! assert!(!pdf.contains("https://"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `mdflat` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! mdflat = { version = "0.1", default-features = false }
//! ```
//!
//! ## Concurrency
//!
//! The engine is pure: no I/O, no shared mutable state, no blocking.
//! Call it from as many threads as you like; treat it as synchronous,
//! non-yielding work in any scheduler.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod document;
pub mod error;
pub mod render;
pub mod rules;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use document::{join_for_layout, reflow_paragraphs, split_title};
pub use error::RenderError;
pub use render::{
    render, render_summary, render_to_file, to_pdf_text, to_plain_text, RenderedSummary,
};
pub use rules::RenderMode;

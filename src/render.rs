//! Public entry points for the render engine.
//!
//! Every function here is a thin wrapper over [`crate::rules::apply`]:
//! pick a mode, run the fixed rule pipeline, return a `String`. The engine
//! is pure and stateless — no value is shared, cached, or mutated across
//! invocations, so all of these are safe to call concurrently from any
//! number of threads without coordination.

use crate::document;
use crate::error::RenderError;
use crate::rules::{self, RenderMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Render markdown as plain text: uppercase emphasis, `•` bullets,
/// links as `text (url)`.
///
/// Optimised for copy/paste into plain-text targets (email, chat) where
/// markup would be lost but link destinations must survive.
///
/// # Example
/// ```rust
/// let out = mdflat::to_plain_text("# Notes\n**Key** point");
/// assert_eq!(out, "NOTES\n\nKEY point");
/// ```
pub fn to_plain_text(markdown: &str) -> String {
    render(markdown, RenderMode::Plain)
}

/// Render markdown as PDF-markup text: case-preserving headings,
/// `<b>…</b>` emphasis, links as bare text.
///
/// The output is consumed as paragraph body text by a downstream
/// page-layout engine that renders the inline `<b>` tags visually.
///
/// # Example
/// ```rust
/// let out = mdflat::to_pdf_text("# Notes\n**Key** point");
/// assert_eq!(out, "Notes\n\n<b>Key</b> point");
/// ```
pub fn to_pdf_text(markdown: &str) -> String {
    render(markdown, RenderMode::Pdf)
}

/// Render markdown in the given [`RenderMode`].
pub fn render(markdown: &str, mode: RenderMode) -> String {
    debug!(%mode, input_len = markdown.len(), "rendering markdown");
    let out = rules::apply(markdown, mode);
    debug!(%mode, output_len = out.len(), "render complete");
    out
}

/// Render markdown and write the result to `path`.
///
/// Writes atomically (temp file + rename) so a crash mid-write never
/// leaves a partial file behind. Parent directories are created as needed.
pub fn render_to_file(
    markdown: &str,
    mode: RenderMode,
    path: impl AsRef<Path>,
) -> Result<(), RenderError> {
    let path = path.as_ref();
    let text = render(markdown, mode);

    let write_err = |source: std::io::Error| RenderError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let tmp_path = path.with_extension("txt.tmp");
    fs::write(&tmp_path, &text).map_err(write_err)?;
    fs::rename(&tmp_path, path).map_err(write_err)?;

    debug!(path = %path.display(), bytes = text.len(), "wrote rendered output");
    Ok(())
}

/// Both renderings of one markdown summary, plus its extracted title.
///
/// Mirrors the upstream response shape where a summarizer produces one
/// markdown string and the caller wants the copy-ready text and the
/// layout-ready text side by side. The title is the first line of the
/// PDF rendering (summaries conventionally open with a one-line `##`
/// heading).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSummary {
    /// First line of the PDF rendering, hash markers already stripped.
    pub title: String,
    /// [`to_plain_text`] output.
    pub plain_text: String,
    /// [`to_pdf_text`] output.
    pub pdf_text: String,
}

/// Render a markdown summary in both modes at once.
pub fn render_summary(markdown: &str) -> RenderedSummary {
    let plain_text = to_plain_text(markdown);
    let pdf_text = to_pdf_text(markdown);
    let (title, _body) = document::split_title(&pdf_text);
    RenderedSummary {
        title,
        plain_text,
        pdf_text,
    }
}

//! Error types for the mdflat library.
//!
//! The transform pipeline itself is total: every rule is a pure string
//! rewrite that cannot fail, so `to_plain_text`/`to_pdf_text` return plain
//! `String`s with no error path at all. [`RenderError`] covers the only
//! fallible surfaces around the pipeline — writing rendered output to disk
//! and parsing a mode name from user input.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the mdflat library.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Could not create or write the output file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A mode string did not name one of the two render modes.
    #[error("Unknown render mode '{0}' (expected 'plain' or 'pdf')")]
    UnknownMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_write_failed_display() {
        let e = RenderError::OutputWriteFailed {
            path: PathBuf::from("/tmp/out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = e.to_string();
        assert!(msg.contains("/tmp/out.txt"), "got: {msg}");
        assert!(msg.contains("denied"), "got: {msg}");
    }

    #[test]
    fn unknown_mode_display() {
        let e = RenderError::UnknownMode("html".into());
        assert!(e.to_string().contains("'html'"));
    }
}

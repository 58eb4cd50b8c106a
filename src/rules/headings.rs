//! Heading rule: strip `#` markers and give each heading breathing room.
//!
//! Markdown allows an optional closing hash-run (`# Title #`, `## Sub ##`),
//! possibly followed by trailing spaces. A single pattern with an optional
//! trailing group normalises both the closed and the bare form in one pass.
//!
//! The replacement appends one extra newline so a heading keeps a blank
//! line after it once the final whitespace pass has collapsed everything
//! else. Plain mode additionally uppercases the heading text; PDF mode
//! leaves case alone because the layout engine styles headings itself.

use super::RenderMode;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Levels 1–3 only. Deeper heading runs are outside the supported subset
// and pass through untouched.
static RE_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#{1,3} (.+?)(?: #+)? *$").unwrap());

/// Replace heading lines with their text, uppercased in plain mode.
pub fn flatten(input: &str, mode: RenderMode) -> String {
    RE_HEADING
        .replace_all(input, |caps: &Captures<'_>| {
            let text = &caps[1];
            match mode {
                RenderMode::Plain => format!("{}\n", text.to_uppercase()),
                RenderMode::Pdf => format!("{}\n", text),
            }
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_headings_all_levels() {
        let out = flatten("# Main Title\n## Subtitle\n### Subheading", RenderMode::Plain);
        assert!(out.contains("MAIN TITLE"));
        assert!(out.contains("SUBTITLE"));
        assert!(out.contains("SUBHEADING"));
        assert!(!out.contains('#'));
    }

    #[test]
    fn trailing_hash_form() {
        let out = flatten("# Title #\n## Subtitle ##\n### Sub ###", RenderMode::Plain);
        assert!(out.contains("TITLE"));
        assert!(out.contains("SUBTITLE"));
        assert!(out.contains("SUB"));
        assert!(!out.contains('#'));
    }

    #[test]
    fn trailing_hash_with_trailing_spaces() {
        let out = flatten("## Weekly Notes ##   ", RenderMode::Plain);
        assert_eq!(out, "WEEKLY NOTES\n");
    }

    #[test]
    fn closed_and_bare_forms_normalise_identically() {
        assert_eq!(
            flatten("# Title", RenderMode::Plain),
            flatten("# Title #", RenderMode::Plain)
        );
    }

    #[test]
    fn pdf_mode_preserves_case() {
        let out = flatten("# Main Title", RenderMode::Pdf);
        assert_eq!(out, "Main Title\n");
    }

    #[test]
    fn heading_gains_a_blank_line() {
        let out = flatten("# Title\nbody", RenderMode::Pdf);
        assert_eq!(out, "Title\n\nbody");
    }

    #[test]
    fn hash_without_space_is_not_a_heading() {
        let input = "#hashtag text";
        assert_eq!(flatten(input, RenderMode::Plain), input);
    }

    #[test]
    fn mid_line_hash_is_untouched() {
        let input = "issue #42 is open";
        assert_eq!(flatten(input, RenderMode::Plain), input);
    }

    #[test]
    fn four_hashes_pass_through() {
        let input = "#### Too deep";
        assert_eq!(flatten(input, RenderMode::Plain), input);
    }
}

//! Link and inline-code rules.
//!
//! Links are the second divergence point between the two modes. Plain
//! output is destined for copy/paste, where a stripped URL would be lost
//! for good — so the destination is kept as `text (url)`. PDF output is
//! rendered visually, where a bare URL in running text is noise — so only
//! the link text survives.

use super::RenderMode;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Non-greedy text capture stops at the first `](`, which is what makes
// nested literal brackets work: in `[text with [brackets]](url)` the
// capture grows past the inner `]` because it is not followed by `(`.
// The URL capture is `.*?` rather than `.+?` so `[text]()` still matches.
static RE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.+?)\]\((.*?)\)").unwrap());

static RE_INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.+?)`").unwrap());

/// Rewrite `[text](url)` spans per mode.
///
/// An empty URL renders as bare text in both modes; plain mode never
/// emits a dangling `()` pair.
pub fn rewrite_links(input: &str, mode: RenderMode) -> String {
    RE_LINK
        .replace_all(input, |caps: &Captures<'_>| {
            let text = &caps[1];
            let url = caps[2].trim();
            match mode {
                RenderMode::Plain if !url.is_empty() => format!("{} ({})", text, url),
                _ => text.to_string(),
            }
        })
        .to_string()
}

/// Strip backticks from `` `code` `` spans, keeping the text verbatim.
pub fn strip_inline_code(input: &str) -> String {
    RE_INLINE_CODE.replace_all(input, "$1").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_keeps_the_url() {
        let out = rewrite_links(
            "Check out [this link](https://example.com) for more info",
            RenderMode::Plain,
        );
        assert_eq!(out, "Check out this link (https://example.com) for more info");
    }

    #[test]
    fn pdf_mode_drops_the_url() {
        let out = rewrite_links("See [API](https://api.example.com/v1?key=value)", RenderMode::Pdf);
        assert_eq!(out, "See API");
    }

    #[test]
    fn multiple_links_on_one_line() {
        let out = rewrite_links(
            "Visit [Google](https://google.com) and [GitHub](https://github.com)",
            RenderMode::Plain,
        );
        assert!(out.contains("Google (https://google.com)"));
        assert!(out.contains("GitHub (https://github.com)"));
    }

    #[test]
    fn url_with_query_string() {
        let out = rewrite_links("[API](https://api.example.com/v1?key=value)", RenderMode::Plain);
        assert_eq!(out, "API (https://api.example.com/v1?key=value)");
    }

    #[test]
    fn nested_brackets_in_link_text() {
        let out = rewrite_links("[text with [brackets]](url)", RenderMode::Plain);
        assert_eq!(out, "text with [brackets] (url)");
    }

    #[test]
    fn empty_url_renders_bare_text() {
        assert_eq!(rewrite_links("[text]()", RenderMode::Plain), "text");
        assert_eq!(rewrite_links("[text]()", RenderMode::Pdf), "text");
    }

    #[test]
    fn whitespace_only_url_counts_as_empty() {
        assert_eq!(rewrite_links("[text](  )", RenderMode::Plain), "text");
    }

    #[test]
    fn unclosed_link_passes_through() {
        let input = "[dangling](no-close";
        assert_eq!(rewrite_links(input, RenderMode::Plain), input);
    }

    #[test]
    fn inline_code_loses_backticks() {
        let out = strip_inline_code("Use the `print()` function");
        assert_eq!(out, "Use the print() function");
    }

    #[test]
    fn lone_backtick_passes_through() {
        assert_eq!(strip_inline_code("a ` b"), "a ` b");
    }
}

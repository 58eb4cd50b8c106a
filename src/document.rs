//! Document-shaping helpers applied after rendering.
//!
//! These operate on the engine's *output* rather than on markdown: pulling
//! a title off the first line and reflowing the body into layout-friendly
//! paragraph chunks. They belong here and not in the layout engine because
//! they are pure text transforms with the same no-fail, no-state contract
//! as the rule pipeline.

/// Split rendered text into a first-line title and the remaining body.
///
/// Summaries conventionally open with a one-line heading, which the
/// pipeline has already flattened to bare text. When the input is a
/// single line, that line doubles as both title and body rather than
/// leaving the body empty.
pub fn split_title(text: &str) -> (String, String) {
    match text.split_once('\n') {
        Some((first, rest)) => (first.trim().to_string(), rest.trim().to_string()),
        None => (text.trim().to_string(), text.trim().to_string()),
    }
}

/// Paragraphs longer than this are broken up on sentence boundaries.
const PARAGRAPH_BREAK_THRESHOLD: usize = 400;

/// Target upper bound for a chunk produced by sentence splitting.
const PARAGRAPH_TARGET_LEN: usize = 300;

/// Split rendered text into paragraph chunks for a layout engine.
///
/// Blank lines are dropped; each remaining line becomes one paragraph.
/// Very long paragraphs are broken on `". "` sentence boundaries into
/// chunks of roughly [`PARAGRAPH_TARGET_LEN`] bytes, because walls of
/// text defeat the readability the downstream layout is tuned for. A
/// paragraph with no sentence boundaries is emitted as-is — the layout
/// engine still wraps lines, we only refuse to *eliminate* break points.
///
/// Thresholds are byte lengths; splitting only ever happens at `". "`,
/// so multi-byte characters are never cut in half.
pub fn reflow_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();

    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.len() <= PARAGRAPH_BREAK_THRESHOLD {
            paragraphs.push(line.to_string());
            continue;
        }

        let sentences: Vec<&str> = line.split(". ").collect();
        let mut current = String::new();
        for (i, part) in sentences.iter().enumerate() {
            let mut sentence = (*part).to_string();
            if i < sentences.len() - 1 {
                sentence.push_str(". ");
            }
            if current.len() + sentence.len() > PARAGRAPH_TARGET_LEN {
                if current.is_empty() {
                    // Single oversized sentence; emit it whole.
                    paragraphs.push(sentence);
                } else {
                    paragraphs.push(current.trim_end().to_string());
                    current = sentence;
                }
            } else {
                current.push_str(&sentence);
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.trim_end().to_string());
        }
    }

    paragraphs
}

/// Join paragraph chunks for layout engines that take one flowable body
/// string with explicit break tags.
pub fn join_for_layout(paragraphs: &[String]) -> String {
    paragraphs.join("<br/><br/>")
}

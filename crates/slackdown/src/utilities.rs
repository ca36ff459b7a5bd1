//! Utility functions and constants for HTML processing.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Phrasing content elements, plus the deprecated `strike`
pub const INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "acronym", "audio", "b", "bdi", "bdo", "big", "br", "button", "canvas", "cite",
    "code", "data", "datalist", "del", "dfn", "em", "embed", "i", "iframe", "img", "input", "ins",
    "kbd", "label", "map", "mark", "meter", "noscript", "object", "output", "picture", "progress",
    "q", "ruby", "s", "samp", "script", "select", "slot", "small", "span", "strong", "sub", "sup",
    "svg", "template", "textarea", "time", "tt", "u", "var", "video", "wbr", "strike",
];

/// Elements owned by a dedicated extractor and skipped by the renderer
pub const IGNORED_ELEMENTS: &[&str] = &["dl", "button"];

static INLINE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| INLINE_ELEMENTS.iter().copied().collect());

/// Check if a tag is an inline (phrasing) element
pub fn is_inline(tag: &str) -> bool {
    INLINE_SET.contains(tag.to_lowercase().as_str())
}

/// Check if a tag is handled by a dedicated extractor instead of the renderer
pub fn is_ignored(tag: &str) -> bool {
    IGNORED_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

/// Escape the characters Slack treats as control sequences.
///
/// An `&` that already starts `&amp;`, `&lt;` or `&gt;` is left alone, so
/// escaping never doubles up.
pub fn escape_mrkdwn(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for (i, c) in text.char_indices() {
        match c {
            '&' => {
                let rest = &text[i..];
                if rest.starts_with("&amp;") || rest.starts_with("&lt;") || rest.starts_with("&gt;") {
                    result.push('&');
                } else {
                    result.push_str("&amp;");
                }
            }
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }

    result
}

/// Keep at most `max` characters
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Character count, used for column widths and padding
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

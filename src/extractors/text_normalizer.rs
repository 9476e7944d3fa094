//! Text cleanup for Wikipedia table cells
//!
//! Strips citation markers like `[145]` and separates "(including perpetrator)"
//! style qualifiers from casualty counts.

use regex::Regex;
use std::sync::LazyLock;

/// Bracketed reference marker plus any whitespace in front of it.
pub static CITATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\[[^\[\]]+\]").unwrap());

/// Parenthetical qualifier ending in "perpetrator(s)", preceded by whitespace.
///
/// Broader than a literal ` (… perpetrator)` match: case-insensitive, and the
/// plural counts too, so `"15 (including 2 perpetrators)"` is flagged.
pub static PERPETRATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s\([^()]*perpetrators?\)\s*").unwrap());

/// Cell text with a perpetrator qualifier removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated {
    pub cleaned: String,
    /// Whether the qualifier was present
    pub found: bool,
}

/// Remove every citation marker from `text`.
pub fn strip_citation_markers(text: &str) -> String {
    strip_citation_markers_with(text, &CITATION_RE)
}

/// Remove every match of `pattern` from `text`.
///
/// Repeats until nothing matches, so markers exposed by a removal
/// (`[[1]b]`) are stripped too and the result is a fixed point.
pub fn strip_citation_markers_with(text: &str, pattern: &Regex) -> String {
    let mut current = text.to_string();
    while pattern.is_match(&current) {
        let next = pattern.replace_all(&current, "").into_owned();
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// Split a perpetrator qualifier off a count, e.g. `"5 (including perpetrator)"`.
pub fn extract_perpetrator_annotation(text: &str) -> Annotated {
    extract_perpetrator_annotation_with(text, &PERPETRATOR_RE)
}

pub fn extract_perpetrator_annotation_with(text: &str, pattern: &Regex) -> Annotated {
    Annotated {
        cleaned: pattern.replace_all(text, "").into_owned(),
        found: pattern.is_match(text),
    }
}

//! Hazard Code Matching
//!
//! Runs two independent pattern searches over each extracted line. The
//! strict pattern catches the well-formed suffixed codes; the loose pattern
//! catches codes rendered with a lowercase suffix or trailing punctuation.
//! Over-matching here is intentional; the normalizer recovers correctness.

use hazsheet_models::{ExtractedLine, RawMatchGroup};
use regex::Regex;

/// "H" + three digits + exactly one uppercase letter, e.g. "H302A".
const STRICT_PATTERN: &str = "H[0-9]{3}[A-Z]";
/// "H" + three digits + any single character, e.g. "H302." or "H302a".
const LOOSE_PATTERN: &str = "H[0-9]{3}.";

pub struct CodeMatcher {
    strict: Regex,
    loose: Regex,
}

impl CodeMatcher {
    pub fn new() -> Self {
        Self {
            strict: Regex::new(STRICT_PATTERN).expect("strict hazard-code pattern is valid"),
            loose: Regex::new(LOOSE_PATTERN).expect("loose hazard-code pattern is valid"),
        }
    }

    /// Find all hazard-code tokens on one line. Each pattern's matches are
    /// collected non-overlapping, left to right, and appended as a separate
    /// group when non-empty - never merged. A code present in both groups is
    /// deduplicated downstream, not here.
    pub fn match_line(&self, line: &ExtractedLine) -> Vec<RawMatchGroup> {
        let mut groups = Vec::new();
        for pattern in [&self.strict, &self.loose] {
            let tokens: Vec<String> = pattern
                .find_iter(&line.text)
                .map(|m| m.as_str().to_string())
                .collect();
            if !tokens.is_empty() {
                groups.push(RawMatchGroup {
                    page_index: line.page_index,
                    line_index: line.line_index,
                    tokens,
                });
            }
        }
        groups
    }
}

impl Default for CodeMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> ExtractedLine {
        ExtractedLine::new(0, 0, text)
    }

    #[test]
    fn test_loose_match_catches_trailing_punctuation() {
        let matcher = CodeMatcher::new();

        let groups = matcher.match_line(&line("Causes skin irritation (H315)."));

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].tokens, vec!["H315)"]);
    }

    #[test]
    fn test_strict_and_loose_both_fire_on_suffixed_code() {
        let matcher = CodeMatcher::new();

        let groups = matcher.match_line(&line("Classified as H302A by the supplier"));

        // Two separate groups for the same token: double-sourcing is expected.
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].tokens, vec!["H302A"]);
        assert_eq!(groups[1].tokens, vec!["H302A"]);
    }

    #[test]
    fn test_no_match_yields_no_groups() {
        let matcher = CodeMatcher::new();
        assert!(matcher.match_line(&line("No hazard codes here")).is_empty());
        // A bare 4-char code with nothing after it matches neither variant.
        assert!(matcher.match_line(&line("H315")).is_empty());
    }

    #[test]
    fn test_multiple_codes_on_one_line_found_left_to_right() {
        let matcher = CodeMatcher::new();

        let groups = matcher.match_line(&line("H315, H319, and H335."));

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].tokens, vec!["H315,", "H319,", "H335."]);
    }

    #[test]
    fn test_lowercase_suffix_only_matches_loose() {
        let matcher = CodeMatcher::new();

        let groups = matcher.match_line(&line("see H302a for details"));

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].tokens, vec!["H302a"]);
    }
}

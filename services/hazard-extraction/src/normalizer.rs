//! Code Normalization
//!
//! Collapses the raw match groups into a single deduplicated list of
//! canonical codes. Tokens already in suffixed form (upper or lower case)
//! pass through unchanged; every other token loses exactly its final
//! character, whatever its length.

use std::collections::HashSet;

use hazsheet_models::RawMatchGroup;
use regex::Regex;

pub struct CodeNormalizer {
    suffixed_upper: Regex,
    suffixed_lower: Regex,
}

impl CodeNormalizer {
    pub fn new() -> Self {
        Self {
            suffixed_upper: Regex::new("^H[0-9]{3}[A-Z]$")
                .expect("uppercase suffixed pattern is valid"),
            suffixed_lower: Regex::new("^H[0-9]{3}[a-z]$")
                .expect("lowercase suffixed pattern is valid"),
        }
    }

    /// Normalize every raw token and deduplicate by exact string equality,
    /// keeping first-seen order so runs are deterministic.
    pub fn normalize(&self, groups: &[RawMatchGroup]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut codes = Vec::new();
        for group in groups {
            for token in &group.tokens {
                let code = self.normalize_token(token);
                if seen.insert(code.clone()) {
                    codes.push(code);
                }
            }
        }
        codes
    }

    /// Suffixed-form tokens are kept as-is. Anything else is truncated by
    /// exactly one trailing character - the uniform rule applies regardless
    /// of token length.
    fn normalize_token(&self, token: &str) -> String {
        if self.suffixed_upper.is_match(token) || self.suffixed_lower.is_match(token) {
            return token.to_string();
        }
        match token.char_indices().last() {
            Some((idx, _)) => token[..idx].to_string(),
            None => String::new(),
        }
    }
}

impl Default for CodeNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

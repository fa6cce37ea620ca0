//! Keyword filter used by bulk entry purges
//!
//! A filter is built from a comma separated keyword list and matches
//! content containing every keyword (case-insensitive substring).

/// Conjunction of keywords parsed from a comma separated list
///
/// Tokens are neither trimmed nor de-duplicated, and empty tokens are
/// kept. An empty token is a substring of any content, so `""` (or a
/// list such as `"cat,"`) behaves as if that token were absent, and the
/// empty list matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordFilter {
    tokens: Vec<String>,
}

impl KeywordFilter {
    /// Split `keywords` on `,` and lower-case each token
    pub fn parse(keywords: &str) -> Self {
        Self {
            tokens: keywords.split(',').map(str::to_lowercase).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens found in `content`, counting each token once
    pub fn matched_count(&self, content: &str) -> usize {
        let lowered = content.to_lowercase();
        self.tokens
            .iter()
            .filter(|token| lowered.contains(token.as_str()))
            .count()
    }

    /// True when every token occurs in `content`
    pub fn matches(&self, content: &str) -> bool {
        self.matched_count(content) == self.tokens.len()
    }
}

// src/extract/words.rs
// =============================================================================
// Case-insensitive word frequency of a page's visible text.
//
// Tokens are whatever sits between whitespace: "policy," and "policy" are
// different words. Punctuation is deliberately left alone.
// =============================================================================

use serde::Serialize;
use std::collections::BTreeMap;

use super::document::ParsedDocument;

/// Lower-cased token -> number of occurrences.
///
/// Keys are never empty and never contain whitespace, counts are >= 1.
/// Serializes as a plain JSON object, sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordFrequency {
    counts: BTreeMap<String, u64>,
}

impl WordFrequency {
    /// Count the words of a document's visible text
    pub fn from_document(document: &ParsedDocument) -> Self {
        Self::from_text(&document.visible_text())
    }

    pub fn from_text(text: &str) -> Self {
        let mut counts = BTreeMap::new();

        let flattened = text.replace('\n', " ");
        for token in flattened.split_whitespace().map(str::trim) {
            // Lower-casing can't introduce whitespace in practice, but split
            // again so a key never carries any
            let lowered = token.to_lowercase();
            for word in lowered.split_whitespace() {
                *counts.entry(word.to_string()).or_insert(0) += 1;
            }
        }

        log::debug!("counted {} distinct word(s)", counts.len());
        Self { counts }
    }

    #[cfg(test)]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    // The `n` most frequent words, highest count first, ties alphabetical
    pub fn most_common(&self, n: usize) -> Vec<(&str, u64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens seen
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_case_insensitively() {
        let words = WordFrequency::from_text("Privacy policy\nPRIVACY Policy privacy");
        assert_eq!(words.get("privacy"), Some(3));
        assert_eq!(words.get("policy"), Some(2));
        assert_eq!(words.get("Privacy"), None);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_punctuation_stays_attached() {
        let words = WordFrequency::from_text("data, data. data");
        assert_eq!(words.get("data,"), Some(1));
        assert_eq!(words.get("data."), Some(1));
        assert_eq!(words.get("data"), Some(1));
    }

    #[test]
    fn test_no_text_is_empty() {
        assert!(WordFrequency::from_text("").is_empty());
        assert!(WordFrequency::from_text(" \n\t \r\n").is_empty());
    }

    #[test]
    fn test_keys_are_clean_and_total_matches_token_count() {
        let text = "  The quick\tbrown fox\n\njumps over THE lazy\u{a0}dog  ";
        let words = WordFrequency::from_text(text);

        for (word, count) in words.iter() {
            assert!(!word.is_empty());
            assert!(!word.chars().any(char::is_whitespace));
            assert_eq!(word, word.to_lowercase());
            assert!(count >= 1);
        }
        assert_eq!(words.total(), text.split_whitespace().count() as u64);
        assert_eq!(words.get("the"), Some(2));
    }

    #[test]
    fn test_document_counting_is_idempotent() {
        let document = ParsedDocument::parse(
            r#"<html><head><script>var x = "ignored";</script></head>
            <body><h1>Privacy Policy</h1><p>We respect your privacy.</p></body></html>"#,
        )
        .unwrap();

        let first = WordFrequency::from_document(&document);
        let second = WordFrequency::from_document(&document);
        assert_eq!(first, second);
        assert_eq!(first.get("privacy"), Some(1));
        assert_eq!(first.get("privacy."), Some(1));
        assert_eq!(first.get("ignored\";"), None);
        assert_eq!(first.get("var"), None);
    }

    #[test]
    fn test_most_common_ranks_by_count_then_word() {
        let words = WordFrequency::from_text("b a c b a b d");
        assert_eq!(words.most_common(3), vec![("b", 3), ("a", 2), ("c", 1)]);
        assert_eq!(words.most_common(10).len(), 4);
        assert!(WordFrequency::default().most_common(5).is_empty());
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let words = WordFrequency::from_text("b a b");
        let json = serde_json::to_string(&words).unwrap();
        assert_eq!(json, r#"{"a":1,"b":2}"#);
    }
}

// src/extract/urls.rs
// =============================================================================
// Finds absolute URLs in raw HTML text with a regular expression.
//
// This works on the raw text, not on a parsed tree, so it also picks up URLs
// sitting in inline scripts, styles, JSON blobs and attributes that no
// selector would think to look at.
//
// A URL is dropped when it contains any of the own-domain exclusion strings
// ANYWHERE in it, not just in the host. "https://evil.com/cfc.com-phish" is
// excluded by "cfc.com". Callers rely on this exact behaviour, keep it.
// =============================================================================

use regex::Regex;
use std::collections::HashSet;

use crate::error::Result;

// http(s)://, then a run that cannot contain '/', '$', '.', '?' or '#',
// then anything up to whitespace, a quote or an angle bracket. The trailing
// \b makes the match give back trailing punctuation like '/' or ')'.
pub const DEFAULT_URL_PATTERN: &str = r#"\bhttps?://[^\s/$.?#]*[^\s"'><]*\b"#;

/// Pulls external URLs out of raw page text
#[derive(Debug, Clone)]
pub struct UrlExtractor {
    pattern: Regex,
    exclusions: Vec<String>,
}

impl UrlExtractor {
    /// Extractor with the default URL pattern
    pub fn new<I, S>(exclusions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_pattern(DEFAULT_URL_PATTERN, exclusions)
    }

    /// Extractor with a caller supplied pattern.
    ///
    /// If the pattern has a capture group, group 1 is taken as the URL,
    /// otherwise the whole match is.
    pub fn with_pattern<I, S>(pattern: &str, exclusions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pattern = Regex::new(pattern)?;
        let exclusions = exclusions
            .into_iter()
            .map(Into::into)
            .filter(|s: &String| !s.is_empty())
            .collect();

        Ok(Self {
            pattern,
            exclusions,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn exclusions(&self) -> &[String] {
        &self.exclusions
    }

    // Returns every distinct external URL in the text
    //
    // An empty Vec is a normal answer for a page without external links.
    // Order follows first appearance but callers shouldn't depend on it.
    //
    // A rejected own-domain candidate consumes nothing: scanning resumes one
    // character after where it started, so an external URL nested inside it
    // (a redirect target, say) is still found.
    pub fn extract(&self, text: &str) -> Result<Vec<String>> {
        let mut found = Vec::new();
        let mut start = 0;

        while let Some(caps) = self.pattern.captures_at(text, start) {
            let Some(whole) = caps.get(0) else {
                break;
            };
            let url = caps.get(1).unwrap_or(whole).as_str();

            if self.is_own_domain(url) {
                start = next_char_boundary(text, whole.start());
            } else {
                found.push(url.to_string());
                start = if whole.is_empty() {
                    next_char_boundary(text, whole.end())
                } else {
                    whole.end()
                };
            }

            if start > text.len() {
                break;
            }
        }

        let unique = dedup_urls(found);
        log::debug!("found {} unique external URL(s)", unique.len());
        Ok(unique)
    }

    fn is_own_domain(&self, url: &str) -> bool {
        self.exclusions.iter().any(|domain| url.contains(domain.as_str()))
    }
}

// Byte offset just past the character at `pos` (text.len() + 1 at the end)
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| pos + c.len_utf8())
}

/// Removes duplicate URLs, keeping the first occurrence of each
pub fn dedup_urls(urls: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(urls.len());
    urls.into_iter()
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a regex and not the HTML parser?
//    - URLs hide in places that aren't attributes: inline JS, JSON, CSS
//    - A regex over the raw text finds them all in one pass
//
// 2. Why no lookahead in the pattern?
//    - The regex crate guarantees linear-time matching and does not support
//      lookaround, so the own-domain check is a plain contains() afterwards
//    - Linear time matters: the input is whatever the server sent us
//
// 3. Why captures_at in a loop instead of captures_iter?
//    - captures_iter always resumes after the previous match
//    - We need to resume INSIDE a rejected match, so we pick the offset
//    - Offsets are byte positions and must land on a char boundary,
//      hence next_char_boundary()
//
// 4. What does captures_at give back?
//    - One Captures per match; get(0) is the whole match, get(1) the first
//      group. The matched &str borrows from the input text, not from caps
// -----------------------------------------------------------------------------

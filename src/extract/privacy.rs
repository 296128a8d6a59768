// src/extract/privacy.rs
// =============================================================================
// Finds the privacy policy link on a page.
//
// The first anchor whose href mentions both "privacy" and "policy"
// (case-insensitive) wins. Its path then REPLACES the path of the page URL:
// scheme, host, port, query and fragment of the page URL are kept, nothing
// is resolved relative to the current directory.
//
//   page  https://cfc.com/en-gb/?lang=en
//   href  /en-gb/support/privacy-policy/
//   ->    https://cfc.com/en-gb/support/privacy-policy/?lang=en
// =============================================================================

use url::Url;

use super::document::ParsedDocument;
use crate::error::{Result, ScrapeError};

// Returns the absolute privacy policy URL for the page at `page_url`
//
// Err(PrivacyPolicyNotFound) is the normal answer for a page without such a
// link; callers should branch on it, not treat it as a crash.
pub fn locate_privacy_policy(document: &ParsedDocument, page_url: &str) -> Result<String> {
    let base = Url::parse(page_url).map_err(|e| ScrapeError::InvalidUrl {
        url: page_url.to_string(),
        reason: e.to_string(),
    })?;

    let anchors = document.anchors()?;
    log::debug!("scanning {} anchor(s) for a privacy policy link", anchors.len());

    let anchor = anchors
        .iter()
        .find(|anchor| is_privacy_policy_href(&anchor.href))
        .ok_or_else(|| ScrapeError::PrivacyPolicyNotFound {
            url: page_url.to_string(),
        })?;

    let resolved = replace_path(&base, &anchor.href);
    log::debug!(
        "privacy policy link {:?} ({}) resolved to {}",
        anchor.text.trim(),
        anchor.href,
        resolved
    );
    Ok(resolved)
}

fn is_privacy_policy_href(href: &str) -> bool {
    let lowered = href.to_lowercase();
    lowered.contains("privacy") && lowered.contains("policy")
}

// Swaps the path of `base` for the path carried by `href`
//
// An absolute href contributes only its path. A relative one is used up to
// its own '?' or '#', so the base query and fragment survive untouched.
fn replace_path(base: &Url, href: &str) -> String {
    let path = match Url::parse(href) {
        Ok(absolute) => absolute.path().to_string(),
        Err(_) => {
            let end = href.find(|c: char| c == '?' || c == '#').unwrap_or(href.len());
            href[..end].to_string()
        }
    };

    let mut resolved = base.clone();
    resolved.set_path(&path);
    resolved.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locate(html: &str, url: &str) -> Result<String> {
        let document = ParsedDocument::parse(html).unwrap();
        locate_privacy_policy(&document, url)
    }

    #[test]
    fn test_finds_privacy_policy() {
        let html = r#"
            <a href="/en-gb/support/privacy-policy/">Privacy Policy</a>
            <a href="/en-gb/support/terms">Terms</a>
        "#;
        assert_eq!(
            locate(html, "https://cfc.com").unwrap(),
            "https://cfc.com/en-gb/support/privacy-policy/"
        );
    }

    #[test]
    fn test_first_match_wins() {
        let html = r#"
            <a href="/terms">Terms</a>
            <a href="/legal/Privacy-Policy">Privacy</a>
            <a href="/other/privacy_policy">Privacy again</a>
        "#;
        assert_eq!(
            locate(html, "https://example.com/").unwrap(),
            "https://example.com/legal/Privacy-Policy"
        );
    }

    #[test]
    fn test_needs_both_words_in_href() {
        // Link text is not looked at, only the href
        let html = r#"
            <a href="/privacy">Privacy Policy</a>
            <a href="/policy">Cookie policy</a>
        "#;
        let err = locate(html, "https://example.com").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_path_replaced_not_merged() {
        let html = r#"<a href="privacy-policy">Privacy</a>"#;
        assert_eq!(
            locate(html, "https://example.com/deep/page").unwrap(),
            "https://example.com/privacy-policy"
        );
    }

    #[test]
    fn test_keeps_port_query_and_fragment() {
        let html = r#"<a href="/privacy-policy">Privacy</a>"#;
        assert_eq!(
            locate(html, "https://example.com:8443/home?lang=en#top").unwrap(),
            "https://example.com:8443/privacy-policy?lang=en#top"
        );
    }

    #[test]
    fn test_absolute_href_contributes_path_only() {
        let html = r#"<a href="https://legal.example.net/privacy-policy/">Privacy</a>"#;
        assert_eq!(
            locate(html, "https://www.example.com").unwrap(),
            "https://www.example.com/privacy-policy/"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let html = r#"<a href="/privacy-policy">Privacy</a>"#;
        let err = locate(html, "not a url").unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidUrl { .. }));
    }

    #[test]
    fn test_page_without_anchors() {
        let err = locate("<p>nothing here</p>", "https://example.com").unwrap_err();
        assert!(matches!(err, ScrapeError::PrivacyPolicyNotFound { .. }));
    }
}

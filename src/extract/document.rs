// src/extract/document.rs
// =============================================================================
// A parsed HTML page and the two queries the scraper needs from it:
// the anchors (href + text, in document order) and the visible text.
//
// Parsing is done by scraper/html5ever, which recovers from any markup the
// way a browser does, so parse() does not fail in practice. It still
// returns a Result so a stricter parser could be dropped in.
// =============================================================================

use scraper::{Html, Node, Selector};

use crate::error::{Result, ScrapeError};

// Elements whose text never shows up on a rendered page
const INVISIBLE_ELEMENTS: [&str; 2] = ["script", "style"];

/// An <a> element with its href and its text content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: String,
    pub text: String,
}

/// Queryable tree built from one page's raw HTML
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    pub fn parse(raw: &str) -> Result<Self> {
        let html = Html::parse_document(raw);
        log::trace!("parsed document with {} recoverable error(s)", html.errors.len());
        Ok(Self { html })
    }

    // Every <a> with a non-empty href, in document order
    pub fn anchors(&self) -> Result<Vec<Anchor>> {
        let selector =
            Selector::parse("a[href]").map_err(|e| ScrapeError::Parse(e.to_string()))?;

        let anchors = self
            .html
            .select(&selector)
            .filter_map(|element| {
                let href = element.value().attr("href")?;
                if href.is_empty() {
                    return None;
                }
                Some(Anchor {
                    href: href.to_string(),
                    text: element.text().collect(),
                })
            })
            .collect();

        Ok(anchors)
    }

    // All text nodes outside <script>/<style>, concatenated as-is.
    //
    // No separator is inserted between nodes: "<b>a</b><b>b</b>" reads "ab",
    // the same as the browser's textContent.
    pub fn visible_text(&self) -> String {
        let mut text = String::new();

        for node in self.html.tree.root().descendants() {
            let Node::Text(fragment) = node.value() else {
                continue;
            };

            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .map_or(false, |el| INVISIBLE_ELEMENTS.contains(&el.name()))
            });

            if !hidden {
                text.push_str(fragment);
            }
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_page() {
        let doc = ParsedDocument::parse("<html><body><h1>CFC UnderWriting</h1></body></html>")
            .unwrap();
        assert_eq!(doc.visible_text(), "CFC UnderWriting");
    }

    #[test]
    fn test_parse_garbage_still_succeeds() {
        let doc = ParsedDocument::parse("<<<div <p>unclosed <b>tags").unwrap();
        assert!(doc.visible_text().contains("unclosed"));
    }

    #[test]
    fn test_anchors_in_document_order() {
        let doc = ParsedDocument::parse(
            r#"<a href="/one">One</a><a>No href</a><a href="">Empty</a><a href="/two"><span>Two</span></a>"#,
        )
        .unwrap();
        let anchors = doc.anchors().unwrap();
        assert_eq!(
            anchors,
            vec![
                Anchor {
                    href: "/one".to_string(),
                    text: "One".to_string()
                },
                Anchor {
                    href: "/two".to_string(),
                    text: "Two".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_visible_text_skips_script_and_style() {
        let doc = ParsedDocument::parse(
            r#"<html><head><title>Title</title><style>p { color: red }</style></head>
            <body><p>Hello</p><script>var hidden = 1;</script><p>World</p></body></html>"#,
        )
        .unwrap();
        let text = doc.visible_text();
        assert!(text.contains("Title"));
        assert!(text.contains("Hello"));
        assert!(text.contains("World"));
        assert!(!text.contains("hidden"));
        assert!(!text.contains("color"));
    }

    #[test]
    fn test_visible_text_ignores_comments() {
        let doc = ParsedDocument::parse("<p>shown<!-- not shown --></p>").unwrap();
        assert_eq!(doc.visible_text(), "shown");
    }

    #[test]
    fn test_empty_page_has_no_text() {
        let doc = ParsedDocument::parse("").unwrap();
        assert_eq!(doc.visible_text().trim(), "");
        assert!(doc.anchors().unwrap().is_empty());
    }
}

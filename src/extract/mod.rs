// src/extract/mod.rs
// =============================================================================
// This module holds the scraping logic proper. Nothing in here touches the
// network or the filesystem: every function takes text or a parsed document
// and returns a value, so each piece can be tested on its own.
//
// Submodules:
// - urls: finds external URLs in raw HTML with a regex
// - classify: sorts those URLs into images/scripts/stylesheets/fonts/links
// - document: parses HTML and exposes anchors and visible text
// - privacy: finds and resolves the privacy policy link
// - words: counts word frequency of visible text
// =============================================================================

mod classify;
mod document;
mod privacy;
mod urls;
mod words;

pub use classify::{ExternalResources, ResourceKind};
pub use document::ParsedDocument;
pub use privacy::locate_privacy_policy;
pub use urls::UrlExtractor;
pub use words::WordFrequency;

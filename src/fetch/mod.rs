// src/fetch/mod.rs
// =============================================================================
// This module downloads pages.
//
// Submodules:
// - http: the real fetcher, a thin wrapper over a reqwest Client
//
// The PageFetcher trait is the seam between the scrape operations and the
// network, so the operations can be tested against canned pages.
// =============================================================================

mod http;

pub use http::HttpFetcher;

use crate::error::Result;

/// Raw HTML of one fetched page plus the URL it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub url: String,
    pub html: String,
}

impl PageContent {
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
        }
    }
}

/// Something that can GET a URL and hand back its body as text.
///
/// Implementations must report network trouble as `ScrapeError::Fetch`
/// instead of panicking.
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> Result<PageContent>;
}

// src/scrape/mod.rs
// =============================================================================
// The two operations the CLI exposes, wired from the pieces in extract/.
//
// - scrape_resources:   fetch index -> find external URLs -> classify
// - privacy_word_count: fetch index -> find privacy link -> fetch it -> count
//
// Both are plain async functions over a PageFetcher and explicit inputs.
// Any failure stops the operation and is returned unchanged; nothing is
// retried. Independent calls share no state and can run side by side.
// =============================================================================

use crate::error::Result;
use crate::extract::{
    locate_privacy_policy, ExternalResources, ParsedDocument, UrlExtractor, WordFrequency,
};
use crate::fetch::PageFetcher;

// Fetches `site_url` and returns its external resources, bucketed by kind
pub async fn scrape_resources<F: PageFetcher>(
    fetcher: &F,
    site_url: &str,
    extractor: &UrlExtractor,
) -> Result<ExternalResources> {
    log::info!("scraping external resources from {}", site_url);

    let page = fetcher.fetch(site_url).await?;
    let urls = extractor.extract(&page.html)?;

    Ok(ExternalResources::classify(urls))
}

// Fetches `site_url`, follows its privacy policy link and counts the words
// on that page
//
// Returns ScrapeError::PrivacyPolicyNotFound when the index page has no such
// link; in that case only one request has been made.
pub async fn privacy_word_count<F: PageFetcher>(
    fetcher: &F,
    site_url: &str,
) -> Result<WordFrequency> {
    log::info!("looking for a privacy policy on {}", site_url);

    let index = fetcher.fetch(site_url).await?;

    // The parsed tree is dropped before the next await
    let policy_url = {
        let document = ParsedDocument::parse(&index.html)?;
        locate_privacy_policy(&document, &index.url)?
    };
    log::info!("privacy policy found at {}", policy_url);

    let policy = fetcher.fetch(&policy_url).await?;
    let document = ParsedDocument::parse(&policy.html)?;

    Ok(WordFrequency::from_document(&document))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why `F: PageFetcher` instead of taking an HttpFetcher?
//    - Generics let the same function run against the real client or the
//      StubFetcher in the tests below
//    - The compiler generates one copy per fetcher type, no runtime cost
//
// 2. Why the extra braces around the first ParsedDocument?
//    - scraper's Html is not Send
//    - Dropping it before the next .await keeps it out of the future's
//      saved state
//
// 3. Why does `?` work on every line?
//    - fetch, extract, parse and locate all return Result<_, ScrapeError>
//    - `?` returns the first failure to the caller unchanged
//
// 4. Why RefCell in the test stub?
//    - fetch() takes &self but we want to record each request
//    - RefCell allows that mutation, checked at runtime
// -----------------------------------------------------------------------------

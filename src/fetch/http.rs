// src/fetch/http.rs
// =============================================================================
// HTTP implementation of PageFetcher.
//
// One reqwest Client is built up front and reused for every request
// (connection pooling). The configured timeout applies per request.
// Non-2xx responses count as failures: a 404 page is not the page we wanted.
// =============================================================================

use reqwest::Client;

use super::{PageContent, PageFetcher};
use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};

/// Fetches pages over HTTP(S) with a shared client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the client from the config
    //
    // Fails only if reqwest cannot set up its TLS backend
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ScrapeError::fetch(&config.site_url, e))?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<PageContent> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::fetch(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Fetch {
                url: url.to_string(),
                reason: format!("HTTP {}", status.as_u16()),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| ScrapeError::fetch(url, e))?;

        log::debug!("fetched {} bytes from {}", html.len(), url);
        Ok(PageContent::new(url, html))
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why map_err everywhere?
//    - reqwest::Error knows what went wrong but not which page we wanted
//    - ScrapeError::fetch() attaches the URL so the log line is useful
//    - After map_err, ? returns early with our own error type
//
// 2. Why is a 404 an error here?
//    - reqwest only fails on transport problems; a 404 is a valid response
//    - We want the page itself, so anything but 2xx is a failed fetch
//
// 3. Why implement a trait instead of calling reqwest directly?
//    - scrape/ only knows about PageFetcher
//    - Tests hand it a stub that serves canned HTML, no network needed
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_default_config() {
        assert!(HttpFetcher::new(&ScrapeConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        let config = ScrapeConfig {
            timeout_secs: 2,
            ..ScrapeConfig::default()
        };
        let fetcher = HttpFetcher::new(&config).unwrap();

        // Port 9 on localhost ("discard") is closed on any sane test machine
        let result = fetcher.fetch("http://127.0.0.1:9/").await;
        assert!(matches!(result, Err(ScrapeError::Fetch { .. })));
    }

    #[tokio::test]
    async fn test_malformed_url_is_fetch_error() {
        let fetcher = HttpFetcher::new(&ScrapeConfig::default()).unwrap();
        let result = fetcher.fetch("not a url").await;
        assert!(matches!(result, Err(ScrapeError::Fetch { .. })));
    }
}

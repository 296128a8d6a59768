// src/error.rs
// =============================================================================
// Error types shared by every component of the scraper.
//
// Each fallible operation returns Result<T, ScrapeError> so a failure is a
// value the caller inspects, never a panic. main.rs is the only place that
// turns these into a printed message and an exit code.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while scraping a site
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network/transport failure, or the server answered with a non-2xx status
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// A URL we need to work with could not be parsed
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The config file could not be read or decoded
    #[error("invalid config {}: {reason}", path.display())]
    InvalidConfig { path: PathBuf, reason: String },

    /// The HTML parser could not build a document
    #[error("failed to parse HTML: {0}")]
    Parse(String),

    /// The URL pattern could not be compiled or run
    #[error("URL extraction failed: {0}")]
    Extraction(String),

    /// No anchor on the page links to a privacy policy
    #[error("privacy policy not found on {url}")]
    PrivacyPolicyNotFound { url: String },

    /// Writing an output or log file failed
    #[error("failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },
}

impl ScrapeError {
    // Builds a Fetch error from a reqwest error, keeping the URL we asked for
    pub fn fetch(url: &str, error: reqwest::Error) -> Self {
        let reason = if error.is_timeout() {
            "request timed out".to_string()
        } else if error.is_connect() {
            format!("connection failed: {}", error)
        } else {
            error.to_string()
        };

        ScrapeError::Fetch {
            url: url.to_string(),
            reason,
        }
    }

    /// True for the "no privacy policy link" outcome, which is expected
    /// on many sites and is not a fault
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScrapeError::PrivacyPolicyNotFound { .. })
    }
}

impl From<regex::Error> for ScrapeError {
    fn from(error: regex::Error) -> Self {
        ScrapeError::Extraction(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

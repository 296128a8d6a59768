// src/config.rs
// =============================================================================
// Runtime configuration for a scrape.
//
// Defaults target the CFC Underwriting site. Values can come from a JSON
// file (--config) and are then overridden by individual CLI flags.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{Result, ScrapeError};

/// Everything a scrape needs to know about its target and its outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Index page of the site to scrape
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// Substrings identifying the site's own domains; any URL containing
    /// one of them is not an external resource
    #[serde(default = "default_exclude_domains")]
    pub exclude_domains: Vec<String>,

    /// Per-request deadline in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Destination of the external resources JSON
    #[serde(default = "default_resources_output")]
    pub resources_output: String,

    /// Destination of the privacy policy word count JSON
    #[serde(default = "default_words_output")]
    pub words_output: String,

    /// Destination of failure logs
    #[serde(default = "default_log_output")]
    pub log_output: String,
}

fn default_site_url() -> String {
    "https://www.cfcunderwriting.com".to_string()
}

fn default_exclude_domains() -> Vec<String> {
    vec!["cfc.com".to_string(), "cfcunderwriting.com".to_string()]
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("site-scraper/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_resources_output() -> String {
    "external_resources.json".to_string()
}

fn default_words_output() -> String {
    "privacy_policy_word_count.json".to_string()
}

fn default_log_output() -> String {
    "error.log".to_string()
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            site_url: default_site_url(),
            exclude_domains: default_exclude_domains(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            resources_output: default_resources_output(),
            words_output: default_words_output(),
            log_output: default_log_output(),
        }
    }
}

impl ScrapeConfig {
    /// Load configuration from a JSON file; missing fields take defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ScrapeError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&contents).map_err(|e| ScrapeError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScrapeConfig::default();
        assert_eq!(config.site_url, "https://www.cfcunderwriting.com");
        assert_eq!(config.exclude_domains, vec!["cfc.com", "cfcunderwriting.com"]);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.log_output, "error.log");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ScrapeConfig =
            serde_json::from_str(r#"{"site_url": "https://example.com", "timeout_secs": 3}"#)
                .unwrap();
        assert_eq!(config.site_url, "https://example.com");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.resources_output, "external_resources.json");
        assert_eq!(config.exclude_domains.len(), 2);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scrape.json");
        std::fs::write(&path, r#"{"exclude_domains": ["example.com"]}"#).unwrap();

        let config = ScrapeConfig::from_file(&path).unwrap();
        assert_eq!(config.exclude_domains, vec!["example.com"]);
        assert_eq!(config.site_url, "https://www.cfcunderwriting.com");
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ScrapeConfig::from_file(dir.path().join("nope.json"));
        assert!(matches!(result, Err(ScrapeError::InvalidConfig { .. })));
    }
}

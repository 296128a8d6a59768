// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two operations, plus one that runs both:
//   site-scraper resources       -> external_resources.json
//   site-scraper privacy-words   -> privacy_policy_word_count.json
//   site-scraper all
//
// Global flags tweak the target and outputs. They are applied on top of the
// built-in defaults, or on top of a --config JSON file when one is given.
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ScrapeConfig;
use crate::error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "site-scraper",
    version,
    about = "Inventory a site's external resources and count the words of its privacy policy",
    long_about = "site-scraper fetches a site's index page, lists every external image, script, \
                  stylesheet, font and link it references, and counts the words on the site's \
                  privacy policy page. Results are written as pretty-printed JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON config file; flags below override its values
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Index page of the site to scrape
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Own-domain substring to leave out of the external resources
    /// (repeatable; replaces the default list)
    #[arg(long = "exclude", global = true)]
    pub exclude: Vec<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// External resources output file, also used by `all`
    #[arg(long, global = true)]
    pub resources_output: Option<String>,

    /// Privacy policy word count output file, also used by `all`
    #[arg(long, global = true)]
    pub words_output: Option<String>,

    /// Where failures are logged (".log" is appended when missing)
    #[arg(long, global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the external resources referenced by the index page
    ///
    /// Example: site-scraper resources --url https://example.com
    Resources {
        /// Output file (".json" is appended when missing)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Count the words on the privacy policy page linked from the index page
    ///
    /// Example: site-scraper privacy-words -o words.json
    PrivacyWords {
        /// Output file (".json" is appended when missing)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run both operations, one after the other
    All,
}

impl Cli {
    // Builds the effective config: defaults or --config file, then flags
    pub fn load_config(&self) -> Result<ScrapeConfig> {
        let mut config = match &self.config {
            Some(path) => ScrapeConfig::from_file(path)?,
            None => ScrapeConfig::default(),
        };

        if let Some(url) = &self.url {
            config.site_url = url.clone();
        }
        if !self.exclude.is_empty() {
            config.exclude_domains = self.exclude.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        if let Some(output) = &self.resources_output {
            config.resources_output = output.clone();
        }
        if let Some(output) = &self.words_output {
            config.words_output = output.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.log_output = log_file.clone();
        }

        // A subcommand's own -o wins over the global output flags
        match &self.command {
            Commands::Resources {
                output: Some(output),
            } => config.resources_output = output.clone(),
            Commands::PrivacyWords {
                output: Some(output),
            } => config.words_output = output.clone(),
            _ => {}
        }

        Ok(config)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does `global = true` do?
//    - The flag is accepted before OR after the subcommand name
//    - `site-scraper --url X all` and `site-scraper all --url X` both work
//
// 2. Why Option<String> instead of String with a default?
//    - None means "the user didn't say", so the config file value survives
//    - Defaults live in one place: ScrapeConfig::default()
//
// 3. Why Vec<String> for --exclude?
//    - clap collects a repeated flag into a Vec
//    - An empty Vec means the flag was never given
//
// 4. What is `match &self.command`?
//    - We borrow the enum instead of moving it out of self
//    - `output: Some(output)` only matches when -o was actually passed
// -----------------------------------------------------------------------------

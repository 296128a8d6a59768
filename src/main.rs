// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (RUST_LOG, default "info")
// 2. Parse command-line arguments and build the config
// 3. Run the requested operation(s)
// 4. Write each result as JSON, or log the failure to the log file
// 5. Exit with proper code (0 = success, 1 = an operation failed, 2 = error)
//
// An operation failing is not a crash: it is reported, logged, and the
// process carries on to the next operation (for `all`) and exits cleanly.
// =============================================================================

mod cli;
mod config;
mod error;
mod extract;
mod fetch;
mod output;
mod scrape;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use cli::{Cli, Commands};
use config::ScrapeConfig;
use error::ScrapeError;
use extract::{ExternalResources, ResourceKind, UrlExtractor, WordFrequency};
use fetch::HttpFetcher;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Bad config, TLS setup failure, ... nothing was attempted
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = every requested operation succeeded
//   Ok(1) = at least one operation failed (cause is in the log file)
//   Err   = we could not even start
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    log::debug!("effective config: {:?}", config);

    let fetcher = HttpFetcher::new(&config)?;

    let succeeded = match cli.command {
        Commands::Resources { .. } => handle_resources(&fetcher, &config).await,
        Commands::PrivacyWords { .. } => handle_privacy_words(&fetcher, &config).await,
        Commands::All => {
            // Run both even if the first one fails
            let resources_ok = handle_resources(&fetcher, &config).await;
            let words_ok = handle_privacy_words(&fetcher, &config).await;
            resources_ok && words_ok
        }
    };

    Ok(if succeeded { 0 } else { 1 })
}

async fn handle_resources(fetcher: &HttpFetcher, config: &ScrapeConfig) -> bool {
    println!("🔍 Scraping external resources: {}", config.site_url);

    // Fetch, extract, classify and write; any step can fail
    let outcome = write_resources(fetcher, config).await;

    // Print the status line (and log on failure)
    report(outcome, "External resources were written to", config)
}

async fn handle_privacy_words(fetcher: &HttpFetcher, config: &ScrapeConfig) -> bool {
    println!("🔍 Counting privacy policy words: {}", config.site_url);

    // Two fetches here: the index page, then the policy page it links to
    let outcome = write_privacy_words(fetcher, config).await;

    report(outcome, "Privacy Policy Count was written to", config)
}

async fn write_resources(
    fetcher: &HttpFetcher,
    config: &ScrapeConfig,
) -> Result<PathBuf, ScrapeError> {
    // Build the extractor from config (fails only on a bad pattern)
    let extractor = UrlExtractor::new(&config.exclude_domains)?;
    log::debug!(
        "URL pattern {} excluding {:?}",
        extractor.pattern(),
        extractor.exclusions()
    );

    let resources = scrape::scrape_resources(fetcher, &config.site_url, &extractor).await?;
    print_resource_summary(&resources);

    // Returns the path actually written (".json" may have been appended)
    output::write_json(&resources, &config.resources_output)
}

async fn write_privacy_words(
    fetcher: &HttpFetcher,
    config: &ScrapeConfig,
) -> Result<PathBuf, ScrapeError> {
    let words = scrape::privacy_word_count(fetcher, &config.site_url).await?;
    print_word_summary(&words);

    output::write_json(&words, &config.words_output)
}

// Turns an operation outcome into a status line; failures also go to the
// log file. Returns whether the operation succeeded.
fn report(outcome: Result<PathBuf, ScrapeError>, success: &str, config: &ScrapeConfig) -> bool {
    let error = match outcome {
        Ok(path) => {
            println!("✅ {} {}", success, path.display());
            return true;
        }
        Err(e) => e,
    };

    if error.is_not_found() {
        log::warn!("{}", error);
    } else {
        log::error!("{}", error);
    }

    let message = error.to_string();
    match output::write_log(&message, &config.log_output) {
        Ok(path) => println!("❌ {} (logged to {})", message, path.display()),
        Err(log_error) => {
            log::error!("{}", log_error);
            println!("❌ {}", message);
        }
    }

    false
}

fn print_resource_summary(resources: &ExternalResources) {
    if resources.is_empty() {
        println!("📊 No external resources found");
        return;
    }

    println!("📊 Summary:");
    for kind in ResourceKind::ALL {
        println!("   {:<12} {}", kind, resources.bucket(kind).len());
    }
    println!("   {:<12} {}", "total", resources.len());
}

fn print_word_summary(words: &WordFrequency) {
    if words.is_empty() {
        println!("📊 The privacy policy page has no visible words");
        return;
    }

    println!("📊 Summary:");
    println!("   {:<12} {}", "distinct", words.len());
    println!("   {:<12} {}", "total", words.total());

    println!("🔝 Most common:");
    for (word, count) in words.most_common(5) {
        println!("   {:<12} {}", word, count);
    }
}

//! Sitegrazer main entry point
//!
//! Command-line interface for the bounded same-host crawler.

use anyhow::Context;
use clap::Parser;
use sitegrazer::config::{self, CrawlConfig, DEFAULT_POLITENESS_DELAY_MS, DEFAULT_USER_AGENT};
use sitegrazer::crawler::crawl;
use sitegrazer::output::write_csv_report;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sitegrazer: a bounded, same-host page surveyor
///
/// Crawls every reachable page on the seed URL's host, extracts the title
/// heading, first paragraph, outgoing links and images per page, and writes
/// the result as a CSV report. Stops once the page budget is reached.
#[derive(Parser, Debug)]
#[command(name = "sitegrazer")]
#[command(version = "1.0.0")]
#[command(about = "A bounded, same-host page surveyor", long_about = None)]
struct Cli {
    /// Seed URL the crawl starts from
    #[arg(value_name = "URL")]
    url: String,

    /// Maximum concurrent fetches (clamped to 5)
    #[arg(value_name = "MAX_CONCURRENCY")]
    max_concurrency: usize,

    /// Maximum number of pages to collect
    #[arg(value_name = "MAX_PAGES")]
    max_pages: usize,

    /// Path of the CSV report to write
    #[arg(short, long, default_value = "report.csv")]
    output: PathBuf,

    /// Delay after each successful fetch, in milliseconds
    #[arg(long, default_value_t = DEFAULT_POLITENESS_DELAY_MS)]
    delay_ms: u64,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = CrawlConfig {
        seed_url: cli.url,
        max_concurrency: cli.max_concurrency,
        max_pages: cli.max_pages,
        politeness_delay_ms: cli.delay_ms,
        user_agent: cli.user_agent,
    };
    config::validate(&mut config).context("invalid arguments")?;

    println!("starting crawl\n{}\n", config.seed_url);

    let pages = crawl(&config).await?;

    println!("crawl finished");

    let mut keys: Vec<&String> = pages.keys().collect();
    keys.sort();
    for key in &keys {
        println!("Found page: {}", pages[*key].url);
    }

    write_csv_report(&pages, &cli.output)
        .with_context(|| format!("failed to write report to {}", cli.output.display()))?;
    println!("\nreport generated: {}", cli.output.display());

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitegrazer=info,warn"),
            1 => EnvFilter::new("sitegrazer=debug,info"),
            2 => EnvFilter::new("sitegrazer=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

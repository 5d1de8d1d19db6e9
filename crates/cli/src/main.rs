//! Bundesliga scraper entry point.
//!
//! Scrapes standings and top goalscorers for the configured range of seasons
//! and writes them to a single JSON document. Logging goes to stderr.

use anyhow::Result;
use bundesliga_client::SeasonScraper;
use bundesliga_core::{AppConfig, write_run};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load()?;

    tracing::info!(start = config.start_year, end = config.end_year, "scraping Bundesliga seasons");

    let scraper = SeasonScraper::new(&config)?;
    let run = scraper.run().await;

    let missing = run.seasons.iter().filter(|s| s.topscorers.is_none()).count();
    write_run(&config.output_path, &run)?;

    tracing::info!(
        missing_topscorers = missing,
        "saved {} seasons to {}",
        run.seasons.len(),
        config.output_path.display()
    );

    Ok(())
}

use clap::Parser;
use matchscrape::config::cli::Args;
use matchscrape::config::Config;
use matchscrape::domain::ScrapeOutcome;
use matchscrape::error::Result;
use matchscrape::services::run_scrape;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .init();

    let config = Config::from_args(&args)?;

    match run_scrape(&config.scrape).await? {
        ScrapeOutcome::Matches { records, .. } => {
            info!("Scraping completed successfully! {} matches", records.len())
        }
        ScrapeOutcome::Empty { .. } => warn!("Scraping finished without any matches"),
    }

    Ok(())
}

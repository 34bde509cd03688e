use crate::config::{DumpMode, FetcherKind};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(author, version, about)]
pub struct Args {
    /// Path to an optional JSON configuration file
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Listing page to scrape
    #[arg(long, env = "MATCHSCRAPE_URL")]
    pub url: Option<String>,

    /// User agent sent with the page request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Navigation / request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Selector to wait for once the page has loaded
    #[arg(long)]
    pub wait_selector: Option<String>,

    /// How long to wait for `--wait-selector` before carrying on
    #[arg(long)]
    pub wait_timeout_secs: Option<u64>,

    /// How the page is loaded
    #[arg(long, value_enum)]
    pub fetcher: Option<FetcherKind>,

    /// Read page markup from a saved HTML file instead of the network
    #[arg(long)]
    pub input_html: Option<PathBuf>,

    /// Output JSON file
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Don't attach the derived short label to each match
    #[arg(long)]
    pub no_label: bool,

    /// Attach a random decorative logo to each match
    #[arg(long)]
    pub logo: bool,

    /// Seed for the logo picker
    #[arg(long)]
    pub seed: Option<u64>,

    /// When to write the raw page markup for inspection
    #[arg(long, value_enum)]
    pub debug_dump: Option<DumpMode>,

    /// Where the raw page markup is written
    #[arg(long)]
    pub debug_path: Option<PathBuf>,

    /// Log a failed page load and write an empty result instead of exiting
    #[arg(long)]
    pub continue_on_fetch_error: bool,

    /// Hide the loading spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

pub mod dedup;
pub mod enrichment;
pub mod match_service;
pub mod scraping;

pub use dedup::dedup_by_url;
pub use enrichment::{derive_label, pick_asset, Enrichment};
pub use match_service::{run_scrape, MatchService};
pub use scraping::ScrapingService;

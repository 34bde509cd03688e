use crate::config::ScrapeConfig;
use crate::domain::MatchRecord;
use crate::error::{Result, ScrapeError};
use crate::infrastructure::{CardScraper, PageFetcher};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::info;

pub struct ScrapingService<F> {
    fetcher: F,
    scraper: CardScraper,
    progress: bool,
}

impl<F: PageFetcher> ScrapingService<F> {
    pub fn new(fetcher: F, config: &ScrapeConfig) -> Result<Self> {
        info!("Created new Scraping service");
        Ok(Self {
            fetcher,
            scraper: CardScraper::new(&config.selectors)?,
            progress: config.progress,
        })
    }

    fn spinner(&self, url: &str) -> Result<ProgressBar> {
        if !self.progress {
            return Ok(ProgressBar::hidden());
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} [{elapsed}] {msg}")
                .map_err(|e| ScrapeError::Other(e.to_string()))?,
        );
        pb.set_message(format!("Loading {}", url));
        pb.enable_steady_tick(Duration::from_millis(120));
        Ok(pb)
    }

    pub async fn load_page(&self, url: &str) -> Result<String> {
        let pb = self.spinner(url)?;
        let result = self.fetcher.fetch(url).await;
        pb.finish_and_clear();

        let markup = result?;
        info!("Loaded {} ({} bytes)", url, markup.len());
        Ok(markup)
    }

    pub fn extract_matches(&self, markup: &str) -> Vec<MatchRecord> {
        let matches = self.scraper.extract_from_markup(markup);
        info!("Found {} match cards", matches.len());
        matches
    }
}

use crate::config::{DumpMode, FetchErrorPolicy, ScrapeConfig};
use crate::domain::{ScrapeOutcome, Storage};
use crate::error::Result;
use crate::infrastructure::{Fetcher, FileSystemStore, PageFetcher};
use crate::services::{dedup::dedup_by_url, enrichment::Enrichment, scraping::ScrapingService};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{info, warn};

/// Loads the configured listing once and runs it through
/// extract → enrich → dedup → persist.
pub async fn run_scrape(config: &ScrapeConfig) -> Result<ScrapeOutcome> {
    let fetcher = Fetcher::from_config(config)?;
    let store = Arc::new(FileSystemStore::from_config(config));

    let mut service = MatchService::new(config.clone(), fetcher, store)?;
    service.process().await
}

pub struct MatchService<F> {
    config: ScrapeConfig,
    store: Arc<dyn Storage>,
    scraping: ScrapingService<F>,
    enrichment: Enrichment,
    rng: StdRng,
}

impl<F: PageFetcher> MatchService<F> {
    pub fn new(
        config: ScrapeConfig,
        fetcher: F,
        store: Arc<dyn Storage + 'static>,
    ) -> Result<Self> {
        let scraping = ScrapingService::new(fetcher, &config)?;
        let enrichment = Enrichment::from_config(&config);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            store,
            scraping,
            enrichment,
            rng,
        })
    }

    pub async fn process(&mut self) -> Result<ScrapeOutcome> {
        info!("Starting match scrape of {}", self.config.url);

        let outcome = self.scrape().await?;

        let path = self.store.save_matches(outcome.records())?;
        info!(
            "Scraped {} unique matches -> {}",
            outcome.records().len(),
            path.display()
        );

        self.dump_markup(&outcome)?;
        Ok(outcome)
    }

    async fn scrape(&mut self) -> Result<ScrapeOutcome> {
        let markup = match self.scraping.load_page(&self.config.url).await {
            Ok(markup) => markup,
            Err(e) if self.config.on_fetch_error == FetchErrorPolicy::Continue => {
                warn!(
                    "Failed to load {}: {}; continuing with no matches",
                    self.config.url, e
                );
                return Ok(ScrapeOutcome::Empty { markup: None });
            }
            Err(e) => return Err(e),
        };

        let matches = self.scraping.extract_matches(&markup);
        let matches = self.enrichment.enrich_matches(matches, &mut self.rng);
        let matches = dedup_by_url(matches);

        Ok(ScrapeOutcome::from_records(matches, markup))
    }

    fn dump_markup(&self, outcome: &ScrapeOutcome) -> Result<()> {
        let wanted = match self.config.debug_dump {
            DumpMode::Never => false,
            DumpMode::OnEmpty => outcome.is_empty(),
            DumpMode::Always => true,
        };
        if !wanted {
            return Ok(());
        }

        match outcome.markup() {
            Some(markup) => {
                let path = self.store.save_debug_markup(markup)?;
                info!("Saved page markup to {} for inspection", path.display());
            }
            None => warn!("Page never loaded, no markup to save"),
        }
        Ok(())
    }
}

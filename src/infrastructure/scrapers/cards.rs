use super::{field_attr, field_text, CardSelectors};
use crate::config::CardSelectorConfig;
use crate::domain::MatchRecord;
use crate::error::Result;
use scraper::Html;
use tracing::debug;

/// Reads match cards off the listing page.
///
/// Markup on these pages is unreliable, so every field is optional: a
/// missing element or attribute becomes an empty string and never an error.
pub struct CardScraper {
    selectors: CardSelectors,
}

impl CardScraper {
    pub fn new(config: &CardSelectorConfig) -> Result<Self> {
        Ok(Self {
            selectors: CardSelectors::new(config)?,
        })
    }

    /// One record per card, in document order.
    pub fn extract_matches(&self, document: &Html) -> Vec<MatchRecord> {
        let s = &self.selectors;

        let matches: Vec<MatchRecord> = document
            .select(&s.card)
            .map(|card| {
                MatchRecord::new(
                    field_text(card, &s.league).unwrap_or_default(),
                    field_text(card, &s.home).unwrap_or_default(),
                    field_text(card, &s.away).unwrap_or_default(),
                    field_text(card, &s.time).unwrap_or_default(),
                    field_attr(card, &s.link, &s.link_attr).unwrap_or_default(),
                )
            })
            .collect();

        debug!("Extracted {} cards", matches.len());
        matches
    }

    pub fn extract_from_markup(&self, markup: &str) -> Vec<MatchRecord> {
        self.extract_matches(&Html::parse_document(markup))
    }
}

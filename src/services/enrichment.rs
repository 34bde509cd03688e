use crate::config::ScrapeConfig;
use crate::domain::MatchRecord;
use crate::infrastructure::strip_whitespace;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

const LABEL_PREFIX_LEN: usize = 3;

/// Short, non-unique tag built from the first three letters of each team,
/// e.g. `rea-bar` for Real Madrid v Barcelona.
pub fn derive_label(home: &str, away: &str) -> String {
    format!("{}-{}", label_part(home), label_part(away))
}

fn label_part(team: &str) -> String {
    strip_whitespace(team)
        .to_lowercase()
        .chars()
        .take(LABEL_PREFIX_LEN)
        .collect()
}

/// Uniform pick from `assets`; `None` when there is nothing to pick from.
pub fn pick_asset<R: Rng + ?Sized>(assets: &[String], rng: &mut R) -> Option<String> {
    assets.choose(rng).cloned()
}

pub struct Enrichment {
    label: bool,
    logo: bool,
    assets: Vec<String>,
}

impl Enrichment {
    pub fn new(label: bool, logo: bool, assets: Vec<String>) -> Self {
        Self {
            label,
            logo,
            assets,
        }
    }

    pub fn from_config(config: &ScrapeConfig) -> Self {
        Self::new(config.label, config.logo, config.assets.clone())
    }

    pub fn enrich_matches<R: Rng + ?Sized>(
        &self,
        matches: Vec<MatchRecord>,
        rng: &mut R,
    ) -> Vec<MatchRecord> {
        if !self.label && !self.logo {
            return matches;
        }
        debug!(
            "Enriching {} matches (label: {}, logo: {})",
            matches.len(),
            self.label,
            self.logo
        );

        matches
            .into_iter()
            .map(|mut entry| {
                if self.label {
                    entry.label = Some(derive_label(&entry.home, &entry.away));
                }
                if self.logo {
                    entry.logo = pick_asset(&self.assets, &mut *rng);
                }
                entry
            })
            .collect()
    }
}

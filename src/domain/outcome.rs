use super::MatchRecord;

/// Result of one scrape run.
///
/// `Empty` is the diagnostic branch: nothing survived extraction and
/// deduplication, so the markup (when the page loaded at all) is worth
/// keeping for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    Matches {
        records: Vec<MatchRecord>,
        markup: String,
    },
    Empty {
        markup: Option<String>,
    },
}

impl ScrapeOutcome {
    pub fn from_records(records: Vec<MatchRecord>, markup: String) -> Self {
        if records.is_empty() {
            Self::Empty {
                markup: Some(markup),
            }
        } else {
            Self::Matches { records, markup }
        }
    }

    pub fn records(&self) -> &[MatchRecord] {
        match self {
            Self::Matches { records, .. } => records,
            Self::Empty { .. } => &[],
        }
    }

    pub fn into_records(self) -> Vec<MatchRecord> {
        match self {
            Self::Matches { records, .. } => records,
            Self::Empty { .. } => Vec::new(),
        }
    }

    pub fn markup(&self) -> Option<&str> {
        match self {
            Self::Matches { markup, .. } => Some(markup),
            Self::Empty { markup } => markup.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

use serde::{Deserialize, Serialize};

/// One match card as it appears on the listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub league: String,
    pub home: String,
    pub away: String,
    pub time: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl MatchRecord {
    pub fn new(
        league: String,
        home: String,
        away: String,
        time: String,
        url: String,
    ) -> Self {
        Self {
            league,
            home,
            away,
            time,
            url,
            label: None,
            logo: None,
        }
    }

    pub fn with_label(mut self, label: String) -> Self {
        self.label = Some(label);
        self
    }

    pub fn with_logo(mut self, logo: String) -> Self {
        self.logo = Some(logo);
        self
    }
}

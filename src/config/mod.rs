use crate::config::cli::Args;
use crate::error::{Result, ScrapeError};
use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub mod cli;

pub const DEFAULT_URL: &str = "https://shahid-koora.com/";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

const LOGO_BASE: &str =
    "https://raw.githubusercontent.com/gowrapavan/Goal4u/main/public/assets/img/tv-logo";

const LOGO_NAMES: [&str; 8] = [
    "aves",
    "benfica",
    "braga",
    "fcboavista",
    "maritimo",
    "porto",
    "sporting",
    "valencia",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FetcherKind {
    #[default]
    Http,
    Browser,
}

/// When the raw page markup is written out for inspection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DumpMode {
    Never,
    #[default]
    OnEmpty,
    Always,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetchErrorPolicy {
    #[default]
    Abort,
    Continue,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CardSelectorConfig {
    pub card: String,
    pub league: String,
    pub home: String,
    pub away: String,
    pub time: String,
    pub link: String,
    pub link_attr: String,
}

impl Default for CardSelectorConfig {
    fn default() -> Self {
        Self {
            card: ".card".to_string(),
            league: ".league".to_string(),
            home: ".teams .team:first-child .name".to_string(),
            away: ".teams .team:last-child .name".to_string(),
            time: ".meta".to_string(),
            link: "a.watch-link[data-url]".to_string(),
            link_attr: "data-url".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    pub url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub wait_selector: Option<String>,
    pub wait_timeout_secs: u64,
    pub fetcher: FetcherKind,
    pub input_html: Option<PathBuf>,
    pub selectors: CardSelectorConfig,
    pub output: PathBuf,
    pub label: bool,
    pub logo: bool,
    pub assets: Vec<String>,
    pub seed: Option<u64>,
    pub debug_dump: DumpMode,
    pub debug_path: PathBuf,
    pub on_fetch_error: FetchErrorPolicy,
    pub progress: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 60,
            wait_selector: None,
            wait_timeout_secs: 15,
            fetcher: FetcherKind::Http,
            input_html: None,
            selectors: CardSelectorConfig::default(),
            output: PathBuf::from("json").join("shahidkoora.json"),
            label: true,
            logo: false,
            assets: LOGO_NAMES
                .iter()
                .map(|name| format!("{}/{}.png", LOGO_BASE, name))
                .collect(),
            seed: None,
            debug_dump: DumpMode::OnEmpty,
            debug_path: PathBuf::from("debug.html"),
            on_fetch_error: FetchErrorPolicy::Abort,
            progress: true,
        }
    }
}

impl ScrapeConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScrapeError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Flags given on the command line win over the file and the defaults.
    pub fn apply_args(mut self, args: &Args) -> Self {
        if let Some(url) = &args.url {
            self.url = url.clone();
        }
        if let Some(user_agent) = &args.user_agent {
            self.user_agent = user_agent.clone();
        }
        if let Some(secs) = args.timeout_secs {
            self.timeout_secs = secs;
        }
        if let Some(selector) = &args.wait_selector {
            self.wait_selector = Some(selector.clone());
        }
        if let Some(secs) = args.wait_timeout_secs {
            self.wait_timeout_secs = secs;
        }
        if let Some(fetcher) = args.fetcher {
            self.fetcher = fetcher;
        }
        if let Some(path) = &args.input_html {
            self.input_html = Some(path.clone());
        }
        if let Some(path) = &args.output {
            self.output = path.clone();
        }
        if args.no_label {
            self.label = false;
        }
        if args.logo {
            self.logo = true;
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        if let Some(mode) = args.debug_dump {
            self.debug_dump = mode;
        }
        if let Some(path) = &args.debug_path {
            self.debug_path = path.clone();
        }
        if args.continue_on_fetch_error {
            self.on_fetch_error = FetchErrorPolicy::Continue;
        }
        if args.no_progress {
            self.progress = false;
        }
        self
    }
}

pub struct Config {
    pub scrape: ScrapeConfig,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self> {
        let base = match &args.config_file {
            Some(path) => {
                info!("Loading scrape config from {}", path.display());
                ScrapeConfig::from_file(path)?
            }
            None => ScrapeConfig::default(),
        };
        let scrape = base.apply_args(args);

        Ok(Self { scrape })
    }
}

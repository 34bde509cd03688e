use crate::config::{FetcherKind, ScrapeConfig};
use crate::error::Result;
#[cfg(not(feature = "browser"))]
use crate::error::ScrapeError;

#[cfg(feature = "browser")]
pub(crate) mod browser;
pub(crate) mod file;
pub(crate) mod http;

#[cfg(feature = "browser")]
pub use browser::BrowserFetcher;
pub use file::FileFetcher;
pub use http::HttpFetcher;

/// Loads the markup of one page.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub enum Fetcher {
    Http(HttpFetcher),
    File(FileFetcher),
    #[cfg(feature = "browser")]
    Browser(BrowserFetcher),
}

impl Fetcher {
    /// A saved page always wins over the network.
    pub fn from_config(config: &ScrapeConfig) -> Result<Self> {
        if let Some(path) = &config.input_html {
            return Ok(Self::File(FileFetcher::new(path.clone())));
        }

        match config.fetcher {
            FetcherKind::Http => Ok(Self::Http(HttpFetcher::from_config(config)?)),
            #[cfg(feature = "browser")]
            FetcherKind::Browser => Ok(Self::Browser(BrowserFetcher::from_config(config))),
            #[cfg(not(feature = "browser"))]
            FetcherKind::Browser => Err(ScrapeError::Config(
                "this build has no headless browser support; rebuild with `--features browser`"
                    .to_string(),
            )),
        }
    }
}

impl PageFetcher for Fetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        match self {
            Self::Http(fetcher) => fetcher.fetch(url).await,
            Self::File(fetcher) => fetcher.fetch(url).await,
            #[cfg(feature = "browser")]
            Self::Browser(fetcher) => fetcher.fetch(url).await,
        }
    }
}

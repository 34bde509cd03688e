mod fetchers;
mod scrapers;
mod storage;

#[cfg(feature = "browser")]
pub use fetchers::BrowserFetcher;
pub use fetchers::{FileFetcher, Fetcher, HttpFetcher, PageFetcher};
pub use scrapers::{
    cards::CardScraper, field_attr, field_text, normalize_text, strip_whitespace, CardSelectors,
};
pub use storage::fs_store::FileSystemStore;

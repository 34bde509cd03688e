use super::PageFetcher;
use crate::error::Result;
use std::path::PathBuf;
use tracing::info;

/// Serves a previously saved page, e.g. a debug dump, instead of hitting the site.
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageFetcher for FileFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        info!("Reading {} from {}", url, self.path.display());
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;

    #[tokio::test]
    async fn reads_saved_markup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "<div class=\"card\"></div>").unwrap();

        let markup = FileFetcher::new(&path).fetch("ignored").await.unwrap();
        assert_eq!(markup, "<div class=\"card\"></div>");
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileFetcher::new(dir.path().join("nope.html"))
            .fetch("ignored")
            .await;
        assert!(matches!(result, Err(ScrapeError::Io(_))));
    }
}

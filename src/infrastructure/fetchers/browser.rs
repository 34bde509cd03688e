use super::PageFetcher;
use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures_util::StreamExt;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const SELECTOR_POLL: Duration = Duration::from_millis(250);

/// Renders the page in headless Chrome so script-built listings show up.
///
/// One browser and one page per fetch; the browser is closed on every path
/// once it has launched.
pub struct BrowserFetcher {
    user_agent: String,
    timeout: Duration,
    wait_selector: Option<String>,
    wait_timeout: Duration,
}

fn browser_err(context: &str, e: impl std::fmt::Display) -> ScrapeError {
    ScrapeError::Browser(format!("{}: {}", context, e))
}

impl BrowserFetcher {
    pub fn from_config(config: &ScrapeConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            wait_selector: config.wait_selector.clone(),
            wait_timeout: Duration::from_secs(config.wait_timeout_secs),
        }
    }

    async fn load(&self, browser: &Browser, url: &str) -> Result<String> {
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| browser_err("Failed to create new page", e))?;

        page.set_user_agent(self.user_agent.as_str())
            .await
            .map_err(|e| browser_err("Failed to set user agent", e))?;

        let navigation = async {
            page.goto(url).await?;
            page.wait_for_navigation().await?;
            Ok::<_, chromiumoxide::error::CdpError>(())
        };
        match tokio::time::timeout(self.timeout, navigation).await {
            Ok(Ok(())) => debug!("Navigation to {} settled", url),
            Ok(Err(e)) => return Err(browser_err("Failed to navigate", e)),
            Err(_) => {
                return Err(ScrapeError::Timeout {
                    url: url.to_string(),
                    secs: self.timeout.as_secs(),
                })
            }
        }

        if let Some(selector) = &self.wait_selector {
            self.wait_for_selector(&page, selector).await;
        }

        page.content()
            .await
            .map_err(|e| browser_err("Failed to read page content", e))
    }

    /// A selector that never shows up is logged; whatever loaded is still used.
    async fn wait_for_selector(&self, page: &Page, selector: &str) {
        let start = Instant::now();
        loop {
            if page.find_element(selector).await.is_ok() {
                debug!("{} appeared after {:?}", selector, start.elapsed());
                return;
            }
            if start.elapsed() > self.wait_timeout {
                warn!(
                    "Timed out after {}s waiting for {}; extracting what loaded",
                    self.wait_timeout.as_secs(),
                    selector
                );
                return;
            }
            tokio::time::sleep(SELECTOR_POLL).await;
        }
    }
}

impl PageFetcher for BrowserFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let config = BrowserConfig::builder()
            .no_sandbox()
            .arg("--disable-setuid-sandbox")
            .request_timeout(self.timeout)
            .build()
            .map_err(|e| browser_err("Failed to build browser config", e))?;

        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| browser_err("Failed to launch browser", e))?;

        let handle = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        info!("Loading {} in headless Chrome", url);
        let result = self.load(&browser, url).await;

        if let Err(e) = browser.close().await {
            warn!("Failed to close browser: {}", e);
        }
        if let Err(e) = handle.await {
            warn!("Browser handler task ended abnormally: {}", e);
        }

        result
    }
}

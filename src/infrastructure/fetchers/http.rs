use super::PageFetcher;
use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};
use reqwest::{Client, ClientBuilder};
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{info, warn};

fn client_builder(config: &ScrapeConfig) -> ClientBuilder {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(&config.user_agent)
}

pub struct HttpFetcher {
    client: Client,
    timeout_secs: u64,
    wait_selector: Option<String>,
}

impl HttpFetcher {
    pub fn from_config(config: &ScrapeConfig) -> Result<Self> {
        Self::with_builder(config, client_builder(config))
    }

    fn with_builder(config: &ScrapeConfig, builder: ClientBuilder) -> Result<Self> {
        let client = builder.build()?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
            wait_selector: config.wait_selector.clone(),
        })
    }

    fn request_error(&self, url: &str, e: reqwest::Error) -> ScrapeError {
        if e.is_timeout() {
            ScrapeError::Timeout {
                url: url.to_string(),
                secs: self.timeout_secs,
            }
        } else {
            ScrapeError::Network(e)
        }
    }

    /// Nothing runs scripts here, so a wait selector can only be checked
    /// against what the server sent.
    fn check_wait_selector(&self, markup: &str) {
        let Some(wait_selector) = &self.wait_selector else {
            return;
        };
        let Ok(selector) = Selector::parse(wait_selector) else {
            warn!("Ignoring unparsable wait selector {}", wait_selector);
            return;
        };
        if Html::parse_document(markup).select(&selector).next().is_none() {
            warn!(
                "{} is not in the served markup; the page may need --fetcher browser",
                wait_selector
            );
        }
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.request_error(url, e))?;

        let markup = response
            .error_for_status()?
            .text()
            .await
            .map_err(|e| self.request_error(url, e))?;
        if markup.trim().is_empty() {
            warn!("{} returned an empty body", url);
        }

        self.check_wait_selector(&markup);
        Ok(markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_USER_AGENT;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // system proxies would swallow requests to the loopback server
    fn local_fetcher(config: &ScrapeConfig) -> HttpFetcher {
        HttpFetcher::with_builder(config, client_builder(config).no_proxy()).unwrap()
    }

    fn short_timeout() -> ScrapeConfig {
        ScrapeConfig {
            timeout_secs: 1,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn sends_browser_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(header("user-agent", DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<div class=\"card\"></div>"))
            .expect(1)
            .mount(&server)
            .await;

        let markup = local_fetcher(&short_timeout())
            .fetch(&server.uri())
            .await
            .unwrap();
        assert_eq!(markup, "<div class=\"card\"></div>");
    }

    #[tokio::test]
    async fn error_status_is_a_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
            .expect(1)
            .mount(&server)
            .await;

        let result = local_fetcher(&short_timeout()).fetch(&server.uri()).await;
        assert!(matches!(result, Err(ScrapeError::Network(_))));
    }

    #[tokio::test]
    async fn missing_wait_selector_is_not_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>shell</p>"))
            .mount(&server)
            .await;

        let config = ScrapeConfig {
            wait_selector: Some(".card".to_string()),
            ..short_timeout()
        };
        let markup = local_fetcher(&config).fetch(&server.uri()).await.unwrap();
        assert_eq!(markup, "<p>shell</p>");
    }

    #[tokio::test]
    async fn slow_server_is_a_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<p>late</p>")
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let url = server.uri();
        match local_fetcher(&short_timeout()).fetch(&url).await {
            Err(ScrapeError::Timeout { url: timed_out, secs }) => {
                assert_eq!(timed_out, url);
                assert_eq!(secs, 1);
            }
            other => panic!("expected a timeout, got {other:?}"),
        }
    }
}

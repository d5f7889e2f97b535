use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Url};
use thiserror::Error;
use tracing::debug;

/// Sent on every page fetch; many storefronts refuse unknown agents.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Source of raw page HTML.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String, PreviewError>;
}

/// Fetches pages over HTTP(S) with a fixed timeout and no retries.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, PreviewError> {
        let client = client_builder(timeout).build()?;
        Ok(Self { client })
    }
}

fn client_builder(timeout: Duration) -> ClientBuilder {
    Client::builder().timeout(timeout).user_agent(USER_AGENT)
}

/// Accepts only absolute `http`/`https` URLs.
fn parse_page_url(url: &str) -> Result<Url, PreviewError> {
    let parsed = Url::parse(url.trim()).map_err(|_| PreviewError::InvalidUrl(url.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(PreviewError::InvalidUrl(url.to_string())),
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, PreviewError> {
        let url = parse_page_url(url)?;
        let response = self.client.get(url).send().await?.error_for_status()?;
        debug!(status = %response.status(), "Page fetched");
        Ok(response.text().await?)
    }
}

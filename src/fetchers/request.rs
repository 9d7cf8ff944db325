use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use std::time::Duration;

use super::PageFetcher;
use crate::config::ScrapingConfig;
use crate::error::ImportError;

/// Plain HTTP fetcher, no script execution
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>, user_agent: &str) -> Result<Self, ImportError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    pub fn from_config(config: &ScrapingConfig) -> Result<Self, ImportError> {
        Self::new(
            Some(Duration::from_secs(config.timeout)),
            &config.user_agent,
        )
    }
}

#[async_trait]
impl PageFetcher for RequestFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ImportError> {
        debug!("Fetching {url}");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Fetching {url} failed with status {status}");
            return Err(ImportError::HttpStatus(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

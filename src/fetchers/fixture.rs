use async_trait::async_trait;

use super::PageFetcher;
use crate::error::ImportError;

/// Serves stored HTML for any URL
#[derive(Debug, Clone)]
pub struct FixtureFetcher {
    html: String,
}

impl FixtureFetcher {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

#[async_trait]
impl PageFetcher for FixtureFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, ImportError> {
        Ok(self.html.clone())
    }
}

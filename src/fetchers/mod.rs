use async_trait::async_trait;

use crate::error::ImportError;

mod fixture;
mod request;

pub use fixture::FixtureFetcher;
pub use request::RequestFetcher;

/// Source of page HTML for a URL
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ImportError>;
}

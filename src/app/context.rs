use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::domain::{FeedItem, FeedSource};
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::normalizer::Normalizer;

/// Everything the application wires together, built exactly once before
/// the first frame: configuration, the HTTP client, the normalizer.
pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub normalizer: Normalizer,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self::with_fetcher(config, Arc::new(HttpFetcher::new()))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        Self {
            config,
            fetcher,
            normalizer: Normalizer::new(),
        }
    }

    /// Fetch and parse one source's feed.
    ///
    /// The concrete failure is logged here; user-facing callers collapse it
    /// to [`LOAD_ERROR_MESSAGE`](crate::tui::screen::LOAD_ERROR_MESSAGE).
    pub async fn load(&self, source: FeedSource) -> Result<Vec<FeedItem>> {
        let result = self.try_load(source).await;
        if let Err(ref e) = result {
            tracing::warn!(source = source.title(), error = %e, "feed load failed");
        }
        result
    }

    async fn try_load(&self, source: FeedSource) -> Result<Vec<FeedItem>> {
        let body = self.fetcher.fetch(source.url()).await?;
        self.normalizer.normalize(&body)
    }
}

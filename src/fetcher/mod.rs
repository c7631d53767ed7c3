pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

/// Retrieval of a feed document's raw bytes.
///
/// A trait so the loader and screen logic can be driven by stub fetchers
/// in tests.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

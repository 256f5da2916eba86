//! Page fetcher trait.
//!
//! The extractor only ever needs one thing from the network: the body of a
//! single page. Keeping that behind a trait lets tests feed canned HTML and
//! assert that no request was made at all.
//!
//! # Usage
//!
//! ```rust,ignore
//! use extraction::{HttpFetcher, PageFetcher};
//!
//! let fetcher = HttpFetcher::new()?;
//! let page = fetcher.fetch("https://www.instagram.com/p/abc123/").await?;
//! ```

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::types::page::FetchedPage;

/// Fetches a page body over some transport.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET `url` and read the full body.
    ///
    /// Only transport failures are errors; any HTTP status is returned as a page.
    async fn fetch(&self, url: &str) -> FetchResult<FetchedPage>;
}

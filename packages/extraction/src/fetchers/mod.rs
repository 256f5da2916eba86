//! Page fetcher implementations.
//!
//! # Available Fetchers
//!
//! - `HttpFetcher` - reqwest GET with a bounded timeout
//! - `MockFetcher` - canned bodies for tests

mod http;
mod mock;

pub use http::{HttpFetcher, DEFAULT_FETCH_TIMEOUT};
pub use mock::MockFetcher;

// Re-export from traits for convenience
pub use crate::traits::fetcher::PageFetcher;

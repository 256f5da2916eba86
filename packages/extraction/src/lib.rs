//! Post Media Extraction Library
//!
//! Fetches a social post page and pulls the media URLs out of its
//! server-rendered markup. There is no public API for this data, so the
//! library relies on two conventions in the page:
//!
//! - Open Graph meta tags (`og:image`, `og:video:secure_url`) for single
//!   image and video posts
//! - Inline JSON `display_url` fields for carousel posts, which Open Graph
//!   does not describe
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use extraction::{HttpFetcher, MediaExtractor, MediaKind};
//!
//! let extractor = MediaExtractor::new(Arc::new(HttpFetcher::new()?));
//! let result = extractor.extract("https://www.instagram.com/p/abc123/").await?;
//!
//! match result.kind() {
//!     MediaKind::Video => println!("video: {:?}", result.video_pair()),
//!     MediaKind::ImageSet => println!("{} images", result.len()),
//!     MediaKind::None => {}
//! }
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Fetcher abstraction
//! - [`types`] - Media classification and result types
//! - [`pipeline`] - URL guard, page classification, carousel scan
//! - [`fetchers`] - HTTP and mock fetchers
//! - [`testing`] - Post page fixtures for tests

pub mod error;
pub mod fetchers;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ExtractionError, FetchError};
pub use fetchers::{HttpFetcher, MockFetcher, DEFAULT_FETCH_TIMEOUT};
pub use pipeline::{
    extract_media, is_supported_post_url, parse_media, MediaExtractor, POST_DOMAIN_MARKER,
};
pub use traits::fetcher::PageFetcher;
pub use types::{
    media::{ExtractionResult, MediaKind},
    page::FetchedPage,
};

//! Typed errors for the extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can
//! match on the failure kind and decide how loudly to log it.

use thiserror::Error;

/// Errors that end a media extraction.
///
/// Every variant is terminal for the request. No partial result is ever
/// returned alongside one of these.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// URL does not carry the post domain marker
    #[error("not a supported post URL: {url}")]
    InvalidUrl { url: String },

    /// Page could not be fetched
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Page has no `og:image` meta tag
    #[error("no og:image tag found on page")]
    NoBaseImage,

    /// Primary image URL does not follow the CDN filename convention
    #[error("primary image URL has no CDN filename suffix: {image_url}")]
    NoBaseDomain { image_url: String },
}

impl ExtractionError {
    /// Stable tag for structured logs.
    pub fn kind_label(&self) -> &'static str {
        match self {
            ExtractionError::InvalidUrl { .. } => "invalid_url",
            ExtractionError::Fetch(_) => "fetch_error",
            ExtractionError::NoBaseImage => "no_base_image",
            ExtractionError::NoBaseDomain { .. } => "no_base_domain",
        }
    }
}

/// Errors that can occur while fetching a page.
///
/// A non-2xx status is not an error here; only a failed request is.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request could not be sent or no response arrived (DNS, connect, timeout)
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Response body could not be read
    #[error("reading body from {url} failed: {source}")]
    Body {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No canned page registered (mock fetcher only)
    #[error("no page registered for {url}")]
    NotFound { url: String },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

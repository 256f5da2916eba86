//! Fetched page type.

/// Raw HTML returned for a post URL.
///
/// The status is kept for logging only. A 404 page is still handed to the
/// parser, which will then fail to find the meta tags it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// URL that was requested
    pub url: String,

    /// HTTP status of the response
    pub status: u16,

    /// Full response body
    pub body: String,
}

impl FetchedPage {
    /// Create a page with a 200 status.
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status: 200,
            body: body.into(),
        }
    }

    /// Set the HTTP status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body length in bytes.
    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}

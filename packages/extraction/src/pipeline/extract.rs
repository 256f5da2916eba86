//! Media extraction - classify a post page and pull out its media URLs.

use indexmap::IndexSet;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{ExtractionError, Result};
use crate::pipeline::patterns::{self, POST_DOMAIN_MARKER};
use crate::traits::fetcher::PageFetcher;
use crate::types::media::ExtractionResult;

/// Whether `url` looks like a link to a post.
///
/// This is a plain substring check. Shortened or slightly mangled links that
/// users paste still pass, and anything else is left for the fetch to reject.
pub fn is_supported_post_url(url: &str) -> bool {
    url.contains(POST_DOMAIN_MARKER)
}

/// Fetch `url` and extract the media it links to.
///
/// Exactly one fetch is attempted, and none when the URL fails the guard.
pub async fn extract_media(fetcher: &dyn PageFetcher, url: &str) -> Result<ExtractionResult> {
    if !is_supported_post_url(url) {
        return Err(ExtractionError::InvalidUrl {
            url: url.to_string(),
        });
    }

    let page = fetcher.fetch(url).await?;
    debug!(
        url = %url,
        status = page.status,
        bytes = page.content_length(),
        "Fetched post page"
    );
    if !page.is_success() {
        debug!(url = %url, status = page.status, "Non-success status, parsing body anyway");
    }

    let result = parse_media(&page.body)?;
    info!(
        url = %url,
        kind = %result.kind(),
        media_count = result.len(),
        "Extracted media from post"
    );

    Ok(result)
}

/// Classify a post page body and collect its media URLs.
///
/// - No `og:image` tag: [`ExtractionError::NoBaseImage`]
/// - `og:video:secure_url` present: video, `[og:image, og:video]`
/// - Otherwise: every carousel `display_url` under the primary image's CDN
///   prefix, deduplicated in order of first appearance. The primary image is
///   only included if it shows up in a `display_url` itself.
pub fn parse_media(body: &str) -> Result<ExtractionResult> {
    let image_url = patterns::og_image(body).ok_or(ExtractionError::NoBaseImage)?;

    if let Some(video_url) = patterns::og_video(body) {
        return Ok(ExtractionResult::video(image_url, video_url));
    }

    let no_base_domain = || ExtractionError::NoBaseDomain {
        image_url: image_url.to_string(),
    };
    let prefix = patterns::cdn_prefix(image_url).ok_or_else(no_base_domain)?;
    let display_urls = patterns::display_url_regex(prefix).map_err(|_| no_base_domain())?;

    let urls: IndexSet<String> = display_urls
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    if urls.is_empty() {
        debug!(prefix = %prefix, "No carousel fragments matched the image prefix");
    }

    Ok(ExtractionResult::images(urls))
}

/// Extractor bound to a fetcher, shared across requests.
///
/// Holds no mutable state, so one instance serves concurrent calls.
#[derive(Clone)]
pub struct MediaExtractor {
    fetcher: Arc<dyn PageFetcher>,
}

impl MediaExtractor {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn extract(&self, url: &str) -> Result<ExtractionResult> {
        extract_media(self.fetcher.as_ref(), url).await
    }
}

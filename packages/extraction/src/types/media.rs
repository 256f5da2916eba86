//! Media classification and extraction results.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// What kind of media a post page carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    None,
    ImageSet,
    Video,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::None => write!(f, "none"),
            MediaKind::ImageSet => write!(f, "image_set"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// Media URLs extracted from a single post page.
///
/// Fields are private so the shape always matches the kind:
/// - `None` carries no URLs
/// - `ImageSet` carries unique URLs in order of first appearance
/// - `Video` carries exactly `[thumbnail, video]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    kind: MediaKind,
    urls: Vec<String>,
}

impl ExtractionResult {
    /// A result with no media.
    pub fn none() -> Self {
        Self {
            kind: MediaKind::None,
            urls: Vec::new(),
        }
    }

    /// An image gallery. The set's insertion order is kept.
    pub fn images(urls: IndexSet<String>) -> Self {
        Self {
            kind: MediaKind::ImageSet,
            urls: urls.into_iter().collect(),
        }
    }

    /// An image gallery from any sequence, dropping repeats after the first.
    pub fn images_from<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::images(urls.into_iter().map(Into::into).collect())
    }

    /// A single video with its poster image.
    pub fn video(thumbnail_url: impl Into<String>, video_url: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            urls: vec![thumbnail_url.into(), video_url.into()],
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// `(thumbnail, video)` when this is a video result.
    pub fn video_pair(&self) -> Option<(&str, &str)> {
        match (self.kind, self.urls.as_slice()) {
            (MediaKind::Video, [thumbnail, video]) => Some((thumbnail, video)),
            _ => None,
        }
    }

    pub fn into_urls(self) -> Vec<String> {
        self.urls
    }
}

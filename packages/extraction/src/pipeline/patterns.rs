//! Markup patterns for post pages.
//!
//! Two conventions in the server-rendered page carry the media:
//! Open Graph meta tags (single image or video) and the inline JSON
//! `display_url` fields (every image of a carousel).

use lazy_static::lazy_static;
use regex::Regex;

/// Substring a link must contain to be treated as a post URL.
pub const POST_DOMAIN_MARKER: &str = "instagram.com";

lazy_static! {
    static ref OG_IMAGE_REGEX: Regex =
        Regex::new(r#"property="og:image"\s+content="([^"]*)""#).unwrap();

    static ref OG_VIDEO_REGEX: Regex =
        Regex::new(r#"property="og:video:secure_url"\s+content="([^"]*)""#).unwrap();

    // CDN filenames look like `/12345_67890_13579_n.jpg`
    static ref CDN_SUFFIX_REGEX: Regex = Regex::new(r"/\d+_\d+_\d+_n\.jpg").unwrap();
}

/// Content of the first `og:image` meta tag.
pub fn og_image(body: &str) -> Option<&str> {
    first_capture(&OG_IMAGE_REGEX, body)
}

/// Content of the first `og:video:secure_url` meta tag.
pub fn og_video(body: &str) -> Option<&str> {
    first_capture(&OG_VIDEO_REGEX, body)
}

/// Everything before the CDN filename suffix.
///
/// Returns `None` when the URL has no suffix or nothing precedes it.
pub fn cdn_prefix(image_url: &str) -> Option<&str> {
    let suffix = CDN_SUFFIX_REGEX.find(image_url)?;
    let prefix = &image_url[..suffix.start()];
    (!prefix.is_empty()).then_some(prefix)
}

/// Regex matching carousel `display_url` fields under `prefix`.
///
/// The prefix is escaped so dots and query characters match literally.
pub fn display_url_regex(prefix: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r#""display_url":\s*"({}/\d+_\d+_\d+_n\.jpg)""#,
        regex::escape(prefix)
    ))
}

fn first_capture<'a>(regex: &Regex, body: &'a str) -> Option<&'a str> {
    regex
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

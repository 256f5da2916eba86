//! Testing utilities.
//!
//! Builds post page bodies shaped like the real server-rendered markup so
//! tests in this crate and in applications exercise the same patterns.

/// CDN prefix used by the fixtures.
pub const TEST_CDN_PREFIX: &str = "https://scontent-lax3-1.cdninstagram.com/v/t51.2885-15/e35";

/// CDN image URL under [`TEST_CDN_PREFIX`] with the `_n.jpg` filename convention.
pub fn cdn_image_url(a: u64, b: u64, c: u64) -> String {
    format!("{}/{}_{}_{}_n.jpg", TEST_CDN_PREFIX, a, b, c)
}

/// Builder for post page HTML.
///
/// # Example
///
/// ```rust
/// use extraction::testing::{cdn_image_url, PostPageBuilder};
///
/// let html = PostPageBuilder::new()
///     .og_image(&cdn_image_url(1, 2, 3))
///     .display_url(&cdn_image_url(1, 2, 3))
///     .build();
/// assert!(html.contains("og:image"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct PostPageBuilder {
    og_image: Option<String>,
    og_video: Option<String>,
    video_first: bool,
    display_urls: Vec<String>,
}

impl PostPageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn og_image(mut self, url: &str) -> Self {
        self.og_image = Some(url.to_string());
        self
    }

    pub fn og_video(mut self, url: &str) -> Self {
        self.og_video = Some(url.to_string());
        self
    }

    /// Emit the video tag before the image tag.
    pub fn video_first(mut self) -> Self {
        self.video_first = true;
        self
    }

    /// Append a carousel entry. Repeats are kept as given.
    pub fn display_url(mut self, url: &str) -> Self {
        self.display_urls.push(url.to_string());
        self
    }

    pub fn build(&self) -> String {
        let image = self
            .og_image
            .as_ref()
            .map(|url| format!(r#"<meta property="og:image" content="{}" />"#, url));
        let video = self
            .og_video
            .as_ref()
            .map(|url| format!(r#"<meta property="og:video:secure_url" content="{}" />"#, url));

        let metas: Vec<String> = if self.video_first {
            video.into_iter().chain(image).collect()
        } else {
            image.into_iter().chain(video).collect()
        };

        let nodes: Vec<String> = self
            .display_urls
            .iter()
            .map(|url| format!(r#"{{"__typename": "GraphImage", "display_url": "{}", "is_video": false}}"#, url))
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<title>Instagram</title>
<meta property="og:type" content="instapp:photo" />
{metas}
</head>
<body>
<script type="text/javascript">window._sharedData = {{"edges": [{nodes}]}};</script>
</body>
</html>
"#,
            metas = metas.join("\n"),
            nodes = nodes.join(", "),
        )
    }
}

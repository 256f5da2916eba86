//! Mapping extraction results onto chat replies.

use extraction::{ExtractionResult, MediaKind};
use line::{SendMessage, MAX_REPLY_MESSAGES};

/// Most gallery images sent back for one post. Extra images are dropped.
pub const GALLERY_REPLY_LIMIT: usize = MAX_REPLY_MESSAGES;

/// Reply messages for an extraction result, in extraction order.
///
/// Images are sent at full size with themselves as preview. A video is sent
/// as one message previewed by its thumbnail.
pub fn build_replies(result: &ExtractionResult) -> Vec<SendMessage> {
    match result.kind() {
        MediaKind::ImageSet => result
            .urls()
            .iter()
            .take(GALLERY_REPLY_LIMIT)
            .map(|url| SendMessage::image(url.as_str(), url.as_str()))
            .collect(),
        MediaKind::Video => result
            .video_pair()
            .map(|(thumbnail, video)| vec![SendMessage::video(video, thumbnail)])
            .unwrap_or_default(),
        MediaKind::None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_is_capped_in_order() {
        let urls: Vec<String> = (1..=7).map(|i| format!("https://cdn.test/{}.jpg", i)).collect();
        let result = ExtractionResult::images_from(urls.clone());

        let replies = build_replies(&result);

        assert_eq!(replies.len(), GALLERY_REPLY_LIMIT);
        for (reply, url) in replies.iter().zip(&urls) {
            assert_eq!(reply, &SendMessage::image(url.as_str(), url.as_str()));
        }
    }

    #[test]
    fn test_small_gallery_sends_everything() {
        let result = ExtractionResult::images_from(["https://cdn.test/a.jpg", "https://cdn.test/b.jpg"]);
        assert_eq!(build_replies(&result).len(), 2);
    }

    #[test]
    fn test_video_uses_thumbnail_as_preview() {
        let result = ExtractionResult::video("https://cdn.test/thumb.jpg", "https://cdn.test/clip.mp4");

        assert_eq!(
            build_replies(&result),
            vec![SendMessage::video("https://cdn.test/clip.mp4", "https://cdn.test/thumb.jpg")]
        );
    }

    #[test]
    fn test_empty_results_send_nothing() {
        assert!(build_replies(&ExtractionResult::none()).is_empty());
        assert!(build_replies(&ExtractionResult::images_from(Vec::<String>::new())).is_empty());
    }
}

//! Post link detection in chat text.

use extraction::POST_DOMAIN_MARKER;

// Wrapping and sentence punctuation people put around pasted links
const LINK_TRIM_CHARS: &[char] = &['<', '>', '(', ')', '[', ']', '"', '\'', ',', '.', '!', '?'];

/// First link in `text` that points at a post, if any.
///
/// The link starts at the last scheme before the domain marker, or at the
/// start of the host carrying it, so text glued to the front (common in CJK
/// chat) is dropped. It ends at the first whitespace or non-ASCII character.
/// Links pasted without a scheme get `https://`.
pub fn find_post_link(text: &str) -> Option<String> {
    let word = text
        .split_whitespace()
        .find(|word| word.contains(POST_DOMAIN_MARKER))?;
    let marker_at = word.find(POST_DOMAIN_MARKER)?;

    let start = link_start(&word[..marker_at]);
    let tail = &word[marker_at..];
    let end = marker_at
        + tail
            .find(|c: char| !c.is_ascii_graphic())
            .unwrap_or(tail.len());

    let link = word[start..end].trim_matches(LINK_TRIM_CHARS);
    Some(normalize_url(link))
}

/// Offset in `before` (the word up to the marker) where the link begins.
fn link_start(before: &str) -> usize {
    let scheme = ["https://", "http://"]
        .iter()
        .filter_map(|scheme| before.rfind(scheme))
        .max();
    if let Some(start) = scheme {
        return start;
    }

    before
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_alphanumeric() || *c == '-' || *c == '.')
        .last()
        .map_or(before.len(), |(i, _)| i)
}

/// Normalize URL by adding https:// if no scheme is present
fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

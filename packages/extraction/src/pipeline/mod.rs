//! Extraction pipeline - the core of the library.
//!
//! The pipeline runs, in order:
//! - URL guard (domain marker substring)
//! - Page fetch
//! - Open Graph image lookup
//! - Open Graph video lookup (video posts stop here)
//! - Carousel scan of the inline `display_url` fragments

pub mod extract;
pub mod patterns;

pub use extract::{extract_media, is_supported_post_url, parse_media, MediaExtractor};
pub use patterns::POST_DOMAIN_MARKER;

//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

// Re-export from extraction library for easy access
pub use extraction::{
    ExtractionError, ExtractionResult, HttpFetcher, MediaExtractor, MediaKind, MockFetcher,
};

pub use deps::{LineAdapter, ServerDeps};
pub use test_dependencies::{
    MockExtractor, MockMessenger, SentReply, TestDependencies, TEST_CHANNEL_SECRET,
};
pub use traits::*;

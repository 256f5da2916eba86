// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// The bridge logic lives in domains/media_bridge and talks to these.
//
// Naming convention: Base* for trait names (e.g., BaseMessenger)

use anyhow::Result;
use async_trait::async_trait;
use extraction::{ExtractionError, ExtractionResult};
use line::SendMessage;

// =============================================================================
// Messenger Trait (Infrastructure - chat replies)
// =============================================================================

#[async_trait]
pub trait BaseMessenger: Send + Sync {
    /// Reply to the event identified by `reply_token`
    async fn reply(&self, reply_token: &str, messages: Vec<SendMessage>) -> Result<()>;
}

// =============================================================================
// Media Extractor Trait (Infrastructure - post page scraping)
// =============================================================================

#[async_trait]
pub trait BaseMediaExtractor: Send + Sync {
    /// Fetch a post page and extract its media URLs
    async fn extract(&self, url: &str) -> std::result::Result<ExtractionResult, ExtractionError>;
}

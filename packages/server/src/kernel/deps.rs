//! Server dependencies for request handlers (using traits for testability)
//!
//! Built once at startup and shared read-only across requests.

use anyhow::Result;
use async_trait::async_trait;
use extraction::{ExtractionError, ExtractionResult, HttpFetcher, MediaExtractor};
use line::{LineOptions, LineService, SendMessage};
use std::sync::Arc;

use crate::config::Config;
use crate::kernel::{BaseMediaExtractor, BaseMessenger};

// =============================================================================
// LineService Adapter (implements BaseMessenger trait)
// =============================================================================

/// Wrapper around LineService that implements BaseMessenger trait
pub struct LineAdapter(pub Arc<LineService>);

impl LineAdapter {
    pub fn new(service: Arc<LineService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseMessenger for LineAdapter {
    async fn reply(&self, reply_token: &str, messages: Vec<SendMessage>) -> Result<()> {
        self.0
            .reply_message(reply_token, &messages)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

#[async_trait]
impl BaseMediaExtractor for MediaExtractor {
    async fn extract(&self, url: &str) -> std::result::Result<ExtractionResult, ExtractionError> {
        MediaExtractor::extract(self, url).await
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to handlers (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    /// Verifies and decodes webhook bodies
    pub line: Arc<LineService>,
    pub messenger: Arc<dyn BaseMessenger>,
    pub extractor: Arc<dyn BaseMediaExtractor>,
}

impl ServerDeps {
    pub fn new(
        line: Arc<LineService>,
        messenger: Arc<dyn BaseMessenger>,
        extractor: Arc<dyn BaseMediaExtractor>,
    ) -> Self {
        Self {
            line,
            messenger,
            extractor,
        }
    }

    /// Production wiring: LINE for replies, HTTP for page fetches
    pub fn from_config(config: &Config) -> Result<Self> {
        let line = Arc::new(LineService::new(LineOptions {
            channel_secret: config.channel_secret.clone(),
            channel_access_token: config.channel_token.clone(),
        })?);
        let fetcher = HttpFetcher::new()?;

        Ok(Self::new(
            line.clone(),
            Arc::new(LineAdapter::new(line)),
            Arc::new(MediaExtractor::new(Arc::new(fetcher))),
        ))
    }
}

// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use extraction::{ExtractionError, ExtractionResult, MediaExtractor, MockFetcher};
use line::{LineOptions, LineService, SendMessage};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{BaseMediaExtractor, BaseMessenger, ServerDeps};

/// Channel secret used by test deps; sign webhook bodies with it.
pub const TEST_CHANNEL_SECRET: &str = "test-channel-secret";

// =============================================================================
// Mock Messenger
// =============================================================================

/// A reply captured by the mock messenger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentReply {
    pub reply_token: String,
    pub messages: Vec<SendMessage>,
}

#[derive(Default, Clone)]
pub struct MockMessenger {
    replies: Arc<Mutex<Vec<SentReply>>>,
    fail: bool,
}

impl MockMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every reply call records the reply and then fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn replies(&self) -> Vec<SentReply> {
        self.replies.lock().unwrap().clone()
    }

    pub fn reply_count(&self) -> usize {
        self.replies.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseMessenger for MockMessenger {
    async fn reply(&self, reply_token: &str, messages: Vec<SendMessage>) -> Result<()> {
        self.replies.lock().unwrap().push(SentReply {
            reply_token: reply_token.to_string(),
            messages,
        });

        if self.fail {
            anyhow::bail!("mock messenger configured to fail");
        }
        Ok(())
    }
}

// =============================================================================
// Mock Extractor
// =============================================================================

/// Returns canned results by URL; unknown URLs fail with `NoBaseImage`
#[derive(Default, Clone)]
pub struct MockExtractor {
    results: Arc<Mutex<HashMap<String, ExtractionResult>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_result(self, url: &str, result: ExtractionResult) -> Self {
        self.results
            .lock()
            .unwrap()
            .insert(url.to_string(), result);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseMediaExtractor for MockExtractor {
    async fn extract(&self, url: &str) -> std::result::Result<ExtractionResult, ExtractionError> {
        self.calls.lock().unwrap().push(url.to_string());

        self.results
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or(ExtractionError::NoBaseImage)
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Builder for ServerDeps wired with mocks
pub struct TestDependencies {
    messenger: MockMessenger,
    extractor: Arc<dyn BaseMediaExtractor>,
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            messenger: MockMessenger::new(),
            extractor: Arc::new(MockExtractor::new()),
        }
    }

    pub fn mock_messenger(mut self, messenger: MockMessenger) -> Self {
        self.messenger = messenger;
        self
    }

    pub fn mock_extractor(mut self, extractor: MockExtractor) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }

    /// Use the real extractor over canned pages
    pub fn mock_fetcher(mut self, fetcher: MockFetcher) -> Self {
        self.extractor = Arc::new(MediaExtractor::new(Arc::new(fetcher)));
        self
    }

    pub fn into_server_deps(self) -> ServerDeps {
        let line = LineService::new(LineOptions {
            channel_secret: TEST_CHANNEL_SECRET.to_string(),
            channel_access_token: "test-channel-token".to_string(),
        })
        .expect("test credentials are non-empty");

        ServerDeps::new(Arc::new(line), Arc::new(self.messenger), self.extractor)
    }
}

//! Test harness driving the full router in-process.
//!
//! Page fetches and chat replies go to mocks; everything between them
//! (signature check, event decoding, extraction, reply mapping) is real.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use extraction::MockFetcher;
use line::sign;
use server_core::kernel::{MockMessenger, TestDependencies, TEST_CHANNEL_SECRET};
use server_core::server::build_app;
use tower::ServiceExt;

pub struct TestHarness {
    pub app: Router,
    pub messenger: MockMessenger,
    pub fetcher: MockFetcher,
}

impl TestHarness {
    /// Harness whose fetcher serves the given pages.
    pub fn with_fetcher(fetcher: MockFetcher) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let messenger = MockMessenger::new();
        let deps = TestDependencies::new()
            .mock_fetcher(fetcher.clone())
            .mock_messenger(messenger.clone())
            .into_server_deps();

        Self {
            app: build_app(deps),
            messenger,
            fetcher,
        }
    }

    pub fn new() -> Self {
        Self::with_fetcher(MockFetcher::new())
    }

    /// POST a correctly signed body to /callback.
    pub async fn post_signed(&self, body: Vec<u8>) -> StatusCode {
        let signature = sign(TEST_CHANNEL_SECRET, &body);
        self.post_callback(body, Some(&signature)).await
    }

    /// POST to /callback with an arbitrary signature header.
    pub async fn post_callback(&self, body: Vec<u8>, signature: Option<&str>) -> StatusCode {
        let mut request = Request::builder()
            .method("POST")
            .uri("/callback")
            .header("content-type", "application/json");
        if let Some(signature) = signature {
            request = request.header("x-line-signature", signature);
        }

        let response = self
            .app
            .clone()
            .oneshot(request.body(Body::from(body)).expect("request builds"))
            .await
            .expect("router is infallible");

        response.status()
    }
}

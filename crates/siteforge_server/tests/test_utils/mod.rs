//! Test utilities for siteforge_server tests.
//!
//! Provides a canned generation backend so the pipeline and the HTTP surface
//! run without a remote API.

use async_trait::async_trait;
use siteforge_core::{GenerateRequest, GenerateResponse, Output};
use siteforge_error::{GeminiError, GeminiErrorKind, SiteforgeError};
use siteforge_interface::SiteforgeDriver;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What the mock backend does when called.
pub enum MockBehavior {
    /// Answer with this text
    Reply(String),
    /// Fail as a remote-call error (simulated timeout)
    Failure,
}

/// Canned backend counting its invocations.
pub struct MockDriver {
    behavior: MockBehavior,
    calls: Arc<AtomicUsize>,
}

impl MockDriver {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Reply(text.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            behavior: MockBehavior::Failure,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle on the call counter, valid after the driver moves into a router.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl SiteforgeDriver for MockDriver {
    async fn generate(
        &self,
        _request: &GenerateRequest,
    ) -> Result<GenerateResponse, SiteforgeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Reply(text) => Ok(GenerateResponse::builder()
                .outputs(vec![Output::Text(text.clone())])
                .build()
                .expect("Valid GenerateResponse")),
            MockBehavior::Failure => Err(GeminiError::new(GeminiErrorKind::ApiRequest(
                "Request failed: operation timed out".to_string(),
            ))
            .into()),
        }
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// A reply honoring the marker contract, with bare markup so asset linking
/// has something to do.
#[allow(dead_code)]
pub fn well_formed_reply() -> String {
    concat!(
        "--html--\n",
        "<html>\n<head>\n<title>Bakery</title>\n</head>\n<body>\n<h1>Bakery</h1>\n</body>\n</html>\n",
        "--html--\n\n",
        "--css--\n",
        "body { color: red; }\n",
        "--css--\n\n",
        "--js--\n",
        "console.log(1);\n",
        "--js--\n",
    )
    .to_string()
}

/// A reply missing the `--css--` marker entirely.
#[allow(dead_code)]
pub fn reply_without_css() -> String {
    concat!(
        "--html--\n<html></html>\n--html--\n",
        "--js--\nconsole.log(1);\n--js--\n",
    )
    .to_string()
}

//! Idhaa Completion Provider Layer
//!
//! Pluggable text-completion provider implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `CompletionProvider` trait from
//! `idhaa-domain`. It supports multiple backends with a common interface.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GatewayProvider`: Hosted chat-completions gateway over HTTP
//!
//! # Examples
//!
//! ```
//! use idhaa_llm::MockProvider;
//! use idhaa_domain::traits::CompletionProvider;
//!
//! let provider = MockProvider::new("{\"introduction\": {}}");
//! let result = provider.complete("test prompt").unwrap();
//! assert_eq!(result, "{\"introduction\": {}}");
//! ```

#![warn(missing_docs)]

pub mod gateway;

use idhaa_domain::traits::CompletionProvider as CompletionProviderTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gateway::GatewayProvider;

/// Errors that can occur during completion operations
#[derive(Error, Debug)]
pub enum CompletionError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the gateway
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded upstream
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Upstream account requires billing before further requests
    #[error("Billing required")]
    BillingRequired,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("Completion error: {0}")]
    Other(String),
}

/// Failure kinds a `MockProvider` can be configured to return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    /// Behave like an upstream 429
    RateLimited,

    /// Behave like an upstream 402
    BillingRequired,

    /// Behave like a network failure
    Communication,
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Fail(MockFailure),
}

/// Mock completion provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use idhaa_llm::MockProvider;
/// use idhaa_domain::traits::CompletionProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.complete("any prompt").unwrap(), "Fixed response");
///
/// // Multiple responses
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_response("prompt2", "response2");
/// assert_eq!(provider.complete("prompt1").unwrap(), "response1");
/// assert_eq!(provider.complete("prompt2").unwrap(), "response2");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: MockReply,
    replies: Arc<Mutex<HashMap<String, MockReply>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_reply: MockReply::Text(response.into()),
            replies: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a MockProvider that fails every prompt with the given kind
    pub fn failing(failure: MockFailure) -> Self {
        Self {
            default_reply: MockReply::Fail(failure),
            replies: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.replies
            .lock()
            .unwrap()
            .insert(prompt.into(), MockReply::Text(response.into()));
    }

    /// Configure a failure for a specific prompt
    pub fn add_failure(&mut self, prompt: impl Into<String>, failure: MockFailure) {
        self.replies
            .lock()
            .unwrap()
            .insert(prompt.into(), MockReply::Fail(failure));
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }

    fn failure_to_error(failure: MockFailure) -> CompletionError {
        match failure {
            MockFailure::RateLimited => CompletionError::RateLimited,
            MockFailure::BillingRequired => CompletionError::BillingRequired,
            MockFailure::Communication => {
                CompletionError::Communication("mock network failure".to_string())
            }
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock completion")
    }
}

impl CompletionProviderTrait for MockProvider {
    type Error = CompletionError;

    fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        // Increment call count
        *self.call_count.lock().unwrap() += 1;

        // Check if we have a specific reply for this prompt
        let replies = self.replies.lock().unwrap();
        let reply = replies.get(prompt).unwrap_or(&self.default_reply);

        match reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Fail(failure) => Err(Self::failure_to_error(*failure)),
        }
    }
}

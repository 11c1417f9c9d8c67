//! Gateway Provider Implementation
//!
//! Provides integration with a hosted chat-completions HTTP gateway.
//!
//! # Features
//!
//! - Async HTTP communication with the gateway API
//! - Configurable endpoint, model, and API key
//! - Retry logic with exponential backoff for transient failures
//! - Upstream quota classification (rate limit, billing) surfaced as
//!   distinct errors so the serving layer can map them to status codes
//!
//! # Examples
//!
//! ```no_run
//! use idhaa_llm::GatewayProvider;
//!
//! // Create a gateway provider
//! let provider = GatewayProvider::new(
//!     "https://gateway.example.com",
//!     "radio-script-v1",
//!     "api-key",
//! );
//!
//! // Note: The complete method is async, so you need to use it in an async
//! // context or use the CompletionProvider trait's sync wrapper
//! ```

use crate::CompletionError;
use idhaa_domain::traits::CompletionProvider as CompletionProviderTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default timeout for gateway requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Chat-completions gateway provider
///
/// This provider communicates with a hosted gateway to generate text.
pub struct GatewayProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
    max_retries: u32,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

/// One message in a chat-completions request
#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Response from the chat-completions API
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl GatewayProvider {
    /// Create a new gateway provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Gateway base URL (e.g., "https://gateway.example.com")
    /// - `model`: Model to use
    /// - `api_key`: Bearer token for the gateway
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| CompletionError::Communication(format!("Client build failed: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// The configured model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate a completion using the gateway API
    ///
    /// # Parameters
    ///
    /// - `prompt`: Input prompt text
    ///
    /// # Returns
    ///
    /// Raw completion text from the model
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The gateway rate-limits the account (`RateLimited`, not retried)
    /// - The gateway requires billing (`BillingRequired`, not retried)
    /// - The model does not exist (`ModelNotAvailable`, not retried)
    /// - Network communication fails after all retries
    /// - The response body has no completion text
    pub async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let url = format!("{}/v1/chat/completions", self.endpoint);

        let request_body = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            stream: false,
        };

        // Retry logic with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        match response.json::<ChatResponse>().await {
                            Ok(chat) => {
                                return chat
                                    .choices
                                    .into_iter()
                                    .next()
                                    .map(|choice| choice.message.content)
                                    .ok_or_else(|| {
                                        CompletionError::InvalidResponse(
                                            "Response contained no choices".to_string(),
                                        )
                                    });
                            }
                            Err(e) => {
                                return Err(CompletionError::InvalidResponse(format!(
                                    "Failed to parse response: {}",
                                    e
                                )));
                            }
                        }
                    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        // Quota errors are terminal, not retried
                        return Err(CompletionError::RateLimited);
                    } else if status == reqwest::StatusCode::PAYMENT_REQUIRED {
                        return Err(CompletionError::BillingRequired);
                    } else if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(CompletionError::ModelNotAvailable(self.model.clone()));
                    } else {
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(CompletionError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(CompletionError::Communication(format!(
                        "Request failed: {}",
                        e
                    )));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                debug!("Gateway request failed, retrying in {:?}", delay);
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| CompletionError::Communication("Max retries exceeded".to_string())))
    }
}

impl CompletionProviderTrait for GatewayProvider {
    type Error = CompletionError;

    fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for async function
        tokio::runtime::Runtime::new()
            .map_err(|e| CompletionError::Communication(format!("Runtime error: {}", e)))?
            .block_on(async { self.complete(prompt).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_provider_creation() {
        let provider =
            GatewayProvider::new("https://gateway.example.com", "radio-script-v1", "key").unwrap();
        assert_eq!(provider.endpoint, "https://gateway.example.com");
        assert_eq!(provider.model(), "radio-script-v1");
        assert_eq!(provider.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_gateway_provider_with_max_retries() {
        let provider = GatewayProvider::new("https://gateway.example.com", "m", "key")
            .unwrap()
            .with_max_retries(5);
        assert_eq!(provider.max_retries, 5);
    }

    #[tokio::test]
    async fn test_gateway_error_handling() {
        // Use an unroutable endpoint to trigger a communication error
        let provider = GatewayProvider::new("http://localhost:1", "m", "key")
            .unwrap()
            .with_max_retries(1);

        let result = provider.complete("test").await;
        assert!(result.is_err());

        match result {
            Err(CompletionError::Communication(_)) => {} // Expected
            _ => panic!("Expected Communication error"),
        }
    }
}

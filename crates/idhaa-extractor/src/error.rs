//! Error types for the Generator

use idhaa_gatekeeper::GatekeeperError;
use idhaa_llm::CompletionError;
use thiserror::Error;

/// Errors that can occur during broadcast generation
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// None of the parse strategies recovered JSON from the completion
    #[error("Completion is not parseable JSON ({raw_len} chars): {}", .attempts.join("; "))]
    MalformedCompletion {
        /// Length of the raw completion
        raw_len: usize,
        /// Bounded snippet of the raw completion for diagnostics
        preview: String,
        /// Per-strategy failure messages, in attempt order
        attempts: Vec<String>,
    },

    /// Upstream rate limit hit
    #[error("Rate limit exceeded upstream")]
    RateLimited,

    /// Upstream account needs billing before further requests
    #[error("Billing required upstream")]
    BillingRequired,

    /// Completion provider error
    #[error("Completion provider error: {0}")]
    Completion(String),

    /// Completion timeout
    #[error("Completion timeout")]
    Timeout,

    /// Request title is empty
    #[error("Broadcast title is empty")]
    EmptyTitle,

    /// Request title exceeds maximum length
    #[error("Broadcast title too long: {0} chars (max: {1})")]
    TitleTooLong(usize, usize),

    /// Parsed completion failed document validation
    #[error("Document validation failed: {0}")]
    Document(#[from] GatekeeperError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<CompletionError> for ExtractorError {
    fn from(e: CompletionError) -> Self {
        match e {
            // Quota classifications survive so the serving layer can map
            // them to status codes
            CompletionError::RateLimited => ExtractorError::RateLimited,
            CompletionError::BillingRequired => ExtractorError::BillingRequired,
            other => ExtractorError::Completion(other.to_string()),
        }
    }
}

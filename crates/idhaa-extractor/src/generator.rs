//! Core Generator implementation

use crate::config::GeneratorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_completion;
use crate::prompt::PromptBuilder;
use crate::types::{GenerationMetadata, GenerationRequest, GenerationResult};
use idhaa_domain::traits::CompletionProvider;
use idhaa_domain::GenerationId;
use idhaa_gatekeeper::Gatekeeper;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::time::timeout;
use tracing::{debug, info};

/// The Generator turns a broadcast request into a validated document
pub struct Generator<L>
where
    L: CompletionProvider,
{
    provider: Arc<L>,
    gatekeeper: Gatekeeper,
    config: GeneratorConfig,
    model_name: String,
}

impl<L> Generator<L>
where
    L: CompletionProvider + Send + Sync + 'static,
    ExtractorError: From<L::Error>,
{
    /// Create a new Generator
    pub fn new(provider: L, gatekeeper: Gatekeeper, config: GeneratorConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            gatekeeper,
            config,
            model_name: "llm".to_string(),
        }
    }

    /// Create a new Generator with a specific model name
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Generate a validated broadcast document for a request
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResult, ExtractorError> {
        if request.title.trim().is_empty() {
            return Err(ExtractorError::EmptyTitle);
        }
        if request.title.len() > self.config.max_title_length {
            return Err(ExtractorError::TitleTooLong(
                request.title.len(),
                self.config.max_title_length,
            ));
        }

        let generation_id = GenerationId::new();
        let start_time = SystemTime::now();

        info!(
            "Starting generation {} for title '{}'",
            generation_id, request.title
        );

        // Build prompt
        let prompt = PromptBuilder::from_request(&request).build();
        debug!("Prompt length: {} chars", prompt.len());

        // Call the provider with timeout
        let completion = timeout(
            self.config.completion_timeout(),
            self.call_provider(&prompt),
        )
        .await
        .map_err(|_| ExtractorError::Timeout)??;

        debug!("Completion length: {} chars", completion.len());

        // Recover a JSON value from the completion, then narrow it
        let value = parse_completion(&completion, self.config.preview_chars)?;
        let document = self.gatekeeper.validate(&value)?;

        let processing_time_ms = start_time
            .elapsed()
            .unwrap_or(Duration::from_secs(0))
            .as_millis() as u64;

        info!(
            "Generation {} complete in {} ms",
            generation_id, processing_time_ms
        );

        Ok(GenerationResult {
            document,
            metadata: GenerationMetadata {
                generation_id,
                model_name: self.model_name.clone(),
                prompt_chars: prompt.chars().count(),
                completion_chars: completion.chars().count(),
                processing_time_ms,
            },
        })
    }

    /// Call the completion provider
    async fn call_provider(&self, prompt: &str) -> Result<String, ExtractorError> {
        let provider = Arc::clone(&self.provider);
        let prompt = prompt.to_string();

        // Call in a blocking context since CompletionProvider is not async
        tokio::task::spawn_blocking(move || {
            provider.complete(&prompt).map_err(ExtractorError::from)
        })
        .await
        .map_err(|e| ExtractorError::Completion(format!("Task join error: {}", e)))?
    }
}

//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for text-completion providers
///
/// Implemented by the infrastructure layer (idhaa-llm)
pub trait CompletionProvider {
    /// Error type for completion operations
    type Error;

    /// Send a prompt and return the model's raw completion text
    fn complete(&self, prompt: &str) -> Result<String, Self::Error>;
}

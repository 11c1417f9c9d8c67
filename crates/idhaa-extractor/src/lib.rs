//! Idhaa Generator
//!
//! Turns a broadcast request into a validated school-radio script using a
//! language model.
//!
//! # Overview
//!
//! The Generator is the only pathway that produces broadcast documents. It
//! builds a structured prompt from the request, sends it to a completion
//! provider, recovers a JSON value from whatever text the model returns,
//! and narrows that value to a typed document before anything downstream
//! sees it.
//!
//! # Architecture
//!
//! ```text
//! Request → PromptBuilder → Provider → Parser → Gatekeeper → Document
//! ```
//!
//! # Key Features
//!
//! - **Prompt Engineering**: deterministic prompts from section toggles,
//!   style, and length settings
//! - **Resilient Parsing**: layered recovery from fenced, prose-wrapped,
//!   or control-character-laden completions
//! - **Strict Validation**: required sections checked before a document is
//!   ever returned; no silent fallbacks
//!
//! # Example Usage
//!
//! ```no_run
//! use idhaa_extractor::{Generator, GeneratorConfig, GenerationRequest};
//! use idhaa_gatekeeper::Gatekeeper;
//! use idhaa_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Setup
//! let provider = MockProvider::new(
//!     r#"{"introduction": {}, "quranVerses": [], "hadiths": []}"#,
//! );
//! let gatekeeper = Gatekeeper::default_config();
//! let config = GeneratorConfig::default();
//!
//! let generator = Generator::new(provider, gatekeeper, config);
//!
//! // Generate a broadcast script
//! let request: GenerationRequest =
//!     serde_json::from_str(r#"{"title": "النظافة"}"#)?;
//!
//! let result = generator.generate(request).await?;
//!
//! println!("Verses: {}", result.document.quran_verses.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod generator;
mod parser;
mod prompt;
mod types;


pub use config::GeneratorConfig;
pub use error::ExtractorError;
pub use generator::Generator;
pub use parser::parse_completion;
pub use prompt::PromptBuilder;
pub use types::{
    GenerationMetadata, GenerationRequest, GenerationResult, ScriptLength, ScriptStyle,
    SectionToggles,
};

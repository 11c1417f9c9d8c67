//! Document validation logic

use crate::{GatekeeperError, ValidationConfig};
use idhaa_domain::{BroadcastDocument, Citation, LevelVariants};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

/// JSON keys a completion must carry to become a document
///
/// Everything else in the document is optional; a broadcast without these
/// three cannot be rendered at all.
pub const REQUIRED_SECTIONS: [&str; 3] = ["introduction", "quranVerses", "hadiths"];

/// The Gatekeeper narrows parsed completions to broadcast documents
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Validate a parsed completion and narrow it to a document
    ///
    /// # Arguments
    ///
    /// * `value` - The parsed completion, any JSON type
    ///
    /// # Returns
    ///
    /// The typed document, or an error naming what made the value unusable.
    /// All missing required sections are reported together. Optional
    /// sections with a broken shape are dropped with a warning rather than
    /// failing the document; required sections with a broken shape fail it.
    pub fn validate(&self, value: &Value) -> Result<BroadcastDocument, GatekeeperError> {
        let obj = value
            .as_object()
            .ok_or_else(|| GatekeeperError::NotAnObject(json_type_name(value)))?;

        let missing: Vec<String> = REQUIRED_SECTIONS
            .iter()
            .filter(|key| obj.get(**key).is_none_or(Value::is_null))
            .map(|key| key.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(GatekeeperError::MissingSections { missing });
        }

        let document = BroadcastDocument {
            introduction: required_section::<LevelVariants>(obj, "introduction")?,
            quran_verses: required_section::<Vec<Citation>>(obj, "quranVerses")?,
            hadiths: required_section::<Vec<Citation>>(obj, "hadiths")?,
            did_you_know: optional_section::<LevelVariants>(obj, "didYouKnow"),
            morning_word: optional_section::<LevelVariants>(obj, "morningWord"),
            miscellaneous: optional_section::<LevelVariants>(obj, "miscellaneous"),
            questions: optional_section::<LevelVariants>(obj, "questions"),
            conclusion: optional_section::<String>(obj, "conclusion"),
            radio_ending: optional_section::<String>(obj, "radioEnding"),
        };

        self.check_level_coverage(&document)?;

        Ok(document)
    }

    /// Report (and in strict mode reject) incomplete level coverage
    fn check_level_coverage(&self, document: &BroadcastDocument) -> Result<(), GatekeeperError> {
        let missing = document.introduction.missing_levels();

        if !missing.is_empty() {
            if self.config.require_all_intro_levels {
                return Err(GatekeeperError::InvalidSection {
                    section: "introduction".to_string(),
                    detail: format!(
                        "missing level variants: {}",
                        missing
                            .iter()
                            .map(|l| l.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                });
            }
            if self.config.warn_on_missing_levels {
                warn!(
                    "Introduction lacks variants for levels: {}",
                    missing
                        .iter()
                        .map(|l| l.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
        }

        Ok(())
    }
}

/// Narrow a required section, naming the key on shape mismatch
fn required_section<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    key: &str,
) -> Result<T, GatekeeperError> {
    // Presence and non-null were already checked
    let value = obj.get(key).cloned().unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|e| GatekeeperError::InvalidSection {
        section: key.to_string(),
        detail: e.to_string(),
    })
}

/// Narrow an optional section; a broken shape is dropped, not fatal
fn optional_section<T: DeserializeOwned>(obj: &Map<String, Value>, key: &str) -> Option<T> {
    let value = obj.get(key)?;
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value.clone()) {
        Ok(section) => Some(section),
        Err(e) => {
            warn!("Dropping optional section '{}' with invalid shape: {}", key, e);
            None
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Request and result types for broadcast generation

use idhaa_domain::{BroadcastDocument, GenerationId};
use serde::{Deserialize, Serialize};

/// Style register for the generated script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptStyle {
    /// Formal, dignified register
    Formal,
    /// Plain wording for easy listening
    Simple,
    /// Lively register that keeps students attentive
    Engaging,
}

impl ScriptStyle {
    /// Prompt directive for this style
    pub fn directive(&self) -> &'static str {
        match self {
            ScriptStyle::Formal => {
                "Use a formal, dignified register suitable for a morning assembly address."
            }
            ScriptStyle::Simple => {
                "Use plain, everyday wording that young students follow easily."
            }
            ScriptStyle::Engaging => {
                "Use a lively, warm register that keeps students attentive."
            }
        }
    }
}

impl Default for ScriptStyle {
    fn default() -> Self {
        ScriptStyle::Formal
    }
}

/// Target length of each generated section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptLength {
    /// One or two sentences per section
    Short,
    /// Three to five sentences per section
    Medium,
    /// A full paragraph per section
    Long,
}

impl ScriptLength {
    /// Prompt directive for this length
    pub fn directive(&self) -> &'static str {
        match self {
            ScriptLength::Short => "Keep each section to one or two sentences.",
            ScriptLength::Medium => "Write three to five sentences per section.",
            ScriptLength::Long => "Write a full paragraph per section.",
        }
    }
}

impl Default for ScriptLength {
    fn default() -> Self {
        ScriptLength::Medium
    }
}

/// Which optional sections the broadcast should include
///
/// The introduction and both citation lists are always generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionToggles {
    /// Include the "did you know?" facts section
    #[serde(default = "enabled")]
    pub did_you_know: bool,

    /// Include the morning word section
    #[serde(default = "enabled")]
    pub morning_word: bool,

    /// Include the miscellaneous segment
    #[serde(default = "enabled")]
    pub miscellaneous: bool,

    /// Include the quiz questions segment
    #[serde(default = "enabled")]
    pub questions: bool,

    /// Include the conclusion
    #[serde(default = "enabled")]
    pub conclusion: bool,

    /// Include the sign-off line
    #[serde(default = "enabled")]
    pub radio_ending: bool,
}

fn enabled() -> bool {
    true
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            did_you_know: true,
            morning_word: true,
            miscellaneous: true,
            questions: true,
            conclusion: true,
            radio_ending: true,
        }
    }
}

impl SectionToggles {
    /// JSON keys of the enabled optional sections, in document order
    pub fn enabled_keys(&self) -> Vec<&'static str> {
        let toggles = [
            (self.did_you_know, "didYouKnow"),
            (self.morning_word, "morningWord"),
            (self.miscellaneous, "miscellaneous"),
            (self.questions, "questions"),
            (self.conclusion, "conclusion"),
            (self.radio_ending, "radioEnding"),
        ];
        toggles
            .into_iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, key)| key)
            .collect()
    }
}

/// Request to generate a broadcast script
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Broadcast topic title
    pub title: String,

    /// Category tags narrowing the topic (e.g. "أخلاق", "علوم")
    #[serde(default)]
    pub categories: Vec<String>,

    /// Optional sections to include
    #[serde(default)]
    pub sections: SectionToggles,

    /// Style register
    #[serde(default)]
    pub style: ScriptStyle,

    /// Section length
    #[serde(default)]
    pub length: ScriptLength,
}

/// Result of a generation operation
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// The validated broadcast document
    pub document: BroadcastDocument,

    /// Metadata about the generation
    pub metadata: GenerationMetadata,
}

/// Metadata about a generation operation
#[derive(Debug, Clone)]
pub struct GenerationMetadata {
    /// Identifier of this generation attempt
    pub generation_id: GenerationId,

    /// Name of the model used
    pub model_name: String,

    /// Prompt size in characters
    pub prompt_chars: usize,

    /// Raw completion size in characters
    pub completion_chars: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_minimal_json() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"title": "النظافة"}"#).unwrap();

        assert_eq!(request.title, "النظافة");
        assert!(request.categories.is_empty());
        assert_eq!(request.style, ScriptStyle::Formal);
        assert_eq!(request.length, ScriptLength::Medium);
        // All optional sections default to enabled
        assert_eq!(request.sections.enabled_keys().len(), 6);
    }

    #[test]
    fn test_request_partial_toggles() {
        let request: GenerationRequest = serde_json::from_str(
            r#"{"title": "الصدق", "sections": {"questions": false, "radioEnding": false}}"#,
        )
        .unwrap();

        let keys = request.sections.enabled_keys();
        assert!(!keys.contains(&"questions"));
        assert!(!keys.contains(&"radioEnding"));
        assert!(keys.contains(&"didYouKnow"));
    }

    #[test]
    fn test_enabled_keys_order() {
        let toggles = SectionToggles::default();
        assert_eq!(
            toggles.enabled_keys(),
            vec![
                "didYouKnow",
                "morningWord",
                "miscellaneous",
                "questions",
                "conclusion",
                "radioEnding"
            ]
        );
    }

    #[test]
    fn test_style_and_length_parse_lowercase() {
        let style: ScriptStyle = serde_json::from_str(r#""engaging""#).unwrap();
        assert_eq!(style, ScriptStyle::Engaging);

        let length: ScriptLength = serde_json::from_str(r#""short""#).unwrap();
        assert_eq!(length, ScriptLength::Short);
    }
}

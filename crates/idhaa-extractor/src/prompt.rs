//! Prompt engineering for broadcast generation

use crate::types::{GenerationRequest, ScriptLength, ScriptStyle, SectionToggles};

/// Builds prompts instructing the model to write a broadcast script
pub struct PromptBuilder {
    title: String,
    categories: Vec<String>,
    sections: SectionToggles,
    style: ScriptStyle,
    length: ScriptLength,
}

impl PromptBuilder {
    /// Create a new prompt builder for a broadcast topic
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            categories: Vec::new(),
            sections: SectionToggles::default(),
            style: ScriptStyle::default(),
            length: ScriptLength::default(),
        }
    }

    /// Create a builder from a full generation request
    pub fn from_request(request: &GenerationRequest) -> Self {
        Self {
            title: request.title.clone(),
            categories: request.categories.clone(),
            sections: request.sections,
            style: request.style,
            length: request.length,
        }
    }

    /// Add category tags narrowing the topic
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    /// Choose which optional sections to request
    pub fn with_sections(mut self, sections: SectionToggles) -> Self {
        self.sections = sections;
        self
    }

    /// Set the style register
    pub fn with_style(mut self, style: ScriptStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the target section length
    pub fn with_length(mut self, length: ScriptLength) -> Self {
        self.length = length;
        self
    }

    /// Build the complete generation prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Instruction and content rules
        prompt.push_str(GENERATION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. Topic context
        prompt.push_str(&format!("Broadcast topic: {}\n", self.title));
        if !self.categories.is_empty() {
            prompt.push_str(&format!("Categories: {}\n", self.categories.join(", ")));
        }
        prompt.push('\n');

        // 3. Style and length directives
        prompt.push_str(self.style.directive());
        prompt.push('\n');
        prompt.push_str(self.length.directive());
        prompt.push_str("\n\n");

        // 4. Requested sections
        prompt.push_str("Required top-level JSON keys:\n");
        prompt.push_str("- introduction (leveled)\n");
        prompt.push_str("- quranVerses (citation list)\n");
        prompt.push_str("- hadiths (citation list)\n");
        for key in self.sections.enabled_keys() {
            match key {
                "conclusion" | "radioEnding" => {
                    prompt.push_str(&format!("- {} (plain string)\n", key))
                }
                _ => prompt.push_str(&format!("- {} (leveled)\n", key)),
            }
        }
        prompt.push_str("Omit every key not listed above.\n\n");

        // 5. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

const GENERATION_INSTRUCTIONS: &str = r#"Write a school morning-radio broadcast script in Modern Standard Arabic.
Each leveled section is an object with exactly three variants keyed by audience:

{
  "primary": "text for ages 6-11",
  "middle": "text for ages 12-14",
  "secondary": "text for ages 15-18"
}

Citation lists are arrays of objects:

{
  "text": "the quoted passage",
  "reference": "where it comes from"
}

Rules:
- All content must be suitable for a school morning assembly
- Quote Qur'an verses exactly; "reference" carries the surah name and ayah number
- For hadiths, "reference" names the collection; prefer well-attested narrations
- Primary-level text uses short sentences and simple vocabulary
- Secondary-level text may use the full literary register
- Stay on the given topic; do not add unrelated material
- Never leave a requested section empty"#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Output format (a single JSON object only, no additional text):
{
  "introduction": {"primary": "...", "middle": "...", "secondary": "..."},
  "quranVerses": [{"text": "...", "reference": "..."}],
  "hadiths": [{"text": "...", "reference": "..."}]
}
plus the other requested keys.

Remember: Return ONLY valid JSON, no markdown code blocks, no explanations."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_title() {
        let builder = PromptBuilder::new("النظافة من الإيمان");

        let prompt = builder.build();
        assert!(prompt.contains("النظافة من الإيمان"));
        assert!(prompt.contains("Broadcast topic:"));
    }

    #[test]
    fn test_prompt_includes_categories() {
        let builder = PromptBuilder::new("الصدق")
            .with_categories(vec!["أخلاق".to_string(), "سلوك".to_string()]);

        let prompt = builder.build();
        assert!(prompt.contains("Categories: أخلاق, سلوك"));
    }

    #[test]
    fn test_prompt_omits_empty_categories() {
        let prompt = PromptBuilder::new("الصدق").build();
        assert!(!prompt.contains("Categories:"));
    }

    #[test]
    fn test_prompt_includes_instructions() {
        let prompt = PromptBuilder::new("العلم").build();
        assert!(prompt.contains("Modern Standard Arabic"));
        assert!(prompt.contains("quranVerses"));
        assert!(prompt.contains("Return ONLY valid JSON"));
    }

    #[test]
    fn test_prompt_lists_only_enabled_sections() {
        let sections = SectionToggles {
            did_you_know: false,
            questions: false,
            ..Default::default()
        };
        let prompt = PromptBuilder::new("العلم").with_sections(sections).build();

        assert!(!prompt.contains("- didYouKnow"));
        assert!(!prompt.contains("- questions"));
        assert!(prompt.contains("- morningWord (leveled)"));
        assert!(prompt.contains("- conclusion (plain string)"));
        // Required keys are always listed
        assert!(prompt.contains("- introduction (leveled)"));
        assert!(prompt.contains("- hadiths (citation list)"));
    }

    #[test]
    fn test_prompt_style_and_length_directives() {
        let prompt = PromptBuilder::new("العلم")
            .with_style(ScriptStyle::Engaging)
            .with_length(ScriptLength::Short)
            .build();

        assert!(prompt.contains(ScriptStyle::Engaging.directive()));
        assert!(prompt.contains(ScriptLength::Short.directive()));
    }

    #[test]
    fn test_prompt_deterministic() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"title": "الوطن", "categories": ["وطنية"]}"#).unwrap();

        let first = PromptBuilder::from_request(&request).build();
        let second = PromptBuilder::from_request(&request).build();
        assert_eq!(first, second);
    }
}

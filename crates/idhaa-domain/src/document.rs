//! Broadcast document module - the validated output of a generation request

use crate::level::EducationLevel;
use serde::{Deserialize, Serialize};

/// A quoted scripture passage with its source reference
///
/// Used for both Qur'an verses (reference is surah name and ayah number)
/// and hadiths (reference is the collection and narrator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// The quoted text itself
    pub text: String,

    /// Where the text comes from
    pub reference: String,
}

/// Per-level text variants of one broadcast section
///
/// Levels that the model did not produce are absent, never substituted.
/// Callers that want to fall back to another level's text must do so
/// explicitly via [`LevelVariants::get`] and log that decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelVariants {
    /// Primary-level variant, if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,

    /// Middle-level variant, if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,

    /// Secondary-level variant, if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
}

impl LevelVariants {
    /// Get the variant for one level, if present
    pub fn get(&self, level: EducationLevel) -> Option<&str> {
        match level {
            EducationLevel::Primary => self.primary.as_deref(),
            EducationLevel::Middle => self.middle.as_deref(),
            EducationLevel::Secondary => self.secondary.as_deref(),
        }
    }

    /// True if no level has a variant
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.middle.is_none() && self.secondary.is_none()
    }

    /// Levels with no variant
    pub fn missing_levels(&self) -> Vec<EducationLevel> {
        EducationLevel::all()
            .into_iter()
            .filter(|level| self.get(*level).is_none())
            .collect()
    }
}

/// A complete school-radio broadcast script
///
/// The introduction and the two citation lists are always present; every
/// other section is optional and appears only when the generation request
/// asked for it and the model produced it. Citation lists may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastDocument {
    /// Opening address, per education level
    pub introduction: LevelVariants,

    /// Qur'an verses on the broadcast topic
    pub quran_verses: Vec<Citation>,

    /// Hadiths on the broadcast topic
    pub hadiths: Vec<Citation>,

    /// "Did you know?" facts, per education level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_you_know: Option<LevelVariants>,

    /// Morning word (short reflection), per education level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morning_word: Option<LevelVariants>,

    /// Miscellaneous segment, per education level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miscellaneous: Option<LevelVariants>,

    /// Quiz questions segment, per education level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<LevelVariants>,

    /// Closing words
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<String>,

    /// Sign-off line ending the broadcast
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radio_ending: Option<String>,
}

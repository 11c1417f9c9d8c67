//! Education level module - audience tiers for broadcast content

use serde::{Deserialize, Serialize};

/// Audience education level
///
/// Every leveled section of a broadcast carries one text variant per level:
/// - Primary: ages 6-11, short sentences and simple vocabulary
/// - Middle: ages 12-14, moderate vocabulary
/// - Secondary: ages 15-18, full Modern Standard Arabic register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    /// Primary school audience (ages 6-11)
    Primary,

    /// Middle school audience (ages 12-14)
    Middle,

    /// Secondary school audience (ages 15-18)
    Secondary,
}

impl EducationLevel {
    /// Get the level name as a string
    ///
    /// These are also the JSON keys used inside leveled document sections.
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Primary => "primary",
            EducationLevel::Middle => "middle",
            EducationLevel::Secondary => "secondary",
        }
    }

    /// Parse a level from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "primary" => Some(EducationLevel::Primary),
            "middle" => Some(EducationLevel::Middle),
            "secondary" => Some(EducationLevel::Secondary),
            _ => None,
        }
    }

    /// All levels, in ascending age order
    pub fn all() -> [EducationLevel; 3] {
        [
            EducationLevel::Primary,
            EducationLevel::Middle,
            EducationLevel::Secondary,
        ]
    }

    /// Get the next level up (for readers moving between schools)
    pub fn next(&self) -> Option<Self> {
        match self {
            EducationLevel::Primary => Some(EducationLevel::Middle),
            EducationLevel::Middle => Some(EducationLevel::Secondary),
            EducationLevel::Secondary => None, // Already at top
        }
    }
}

impl std::str::FromStr for EducationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid education level: {}", s))
    }
}

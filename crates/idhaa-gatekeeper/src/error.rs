//! Gatekeeper error types

use thiserror::Error;

/// Errors that can occur during document validation
#[derive(Error, Debug)]
pub enum GatekeeperError {
    /// The completion parsed to something other than a JSON object
    #[error("Completion is not a JSON object (got {0})")]
    NotAnObject(&'static str),

    /// Required sections are missing or null
    #[error("Missing required sections: {}", .missing.join(", "))]
    MissingSections {
        /// Names of the missing or null sections
        missing: Vec<String>,
    },

    /// A required section is present but has the wrong shape
    #[error("Section '{section}' has invalid shape: {detail}")]
    InvalidSection {
        /// JSON key of the offending section
        section: String,
        /// What was wrong with it
        detail: String,
    },
}

//! Gatekeeper configuration

/// Configuration for validation rules
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Log a warning when a leveled section lacks variants for some levels
    pub warn_on_missing_levels: bool,

    /// Reject documents whose introduction does not cover all three levels
    pub require_all_intro_levels: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            warn_on_missing_levels: true,
            require_all_intro_levels: false,
        }
    }
}

impl ValidationConfig {
    /// Create a strict configuration (full level coverage required)
    pub fn strict() -> Self {
        Self {
            warn_on_missing_levels: true,
            require_all_intro_levels: true,
        }
    }
}

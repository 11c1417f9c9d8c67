//! Configuration for the Generator

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Maximum broadcast title length (characters)
    pub max_title_length: usize,

    /// Maximum time for a single completion call (seconds)
    pub completion_timeout_secs: u64,

    /// Cap on the diagnostic preview carried by parse failures (characters)
    pub preview_chars: usize,
}

impl GeneratorConfig {
    /// Get the completion timeout as a Duration
    pub fn completion_timeout(&self) -> Duration {
        Duration::from_secs(self.completion_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_title_length == 0 {
            return Err("max_title_length must be greater than 0".to_string());
        }
        if self.completion_timeout_secs == 0 {
            return Err("completion_timeout_secs must be greater than 0".to_string());
        }
        if self.preview_chars == 0 {
            return Err("preview_chars must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            max_title_length: 200,
            completion_timeout_secs: 120,
            preview_chars: 500,
        }
    }
}

impl GeneratorConfig {
    /// Quick preset: shorter timeout for interactive use
    pub fn quick() -> Self {
        Self {
            max_title_length: 200,
            completion_timeout_secs: 30,
            preview_chars: 200,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_quick_config_is_valid() {
        let config = GeneratorConfig::quick();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_max_title_length() {
        let mut config = GeneratorConfig::default();
        config.max_title_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_preview_chars() {
        let mut config = GeneratorConfig::default();
        config.preview_chars = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GeneratorConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = GeneratorConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.max_title_length, parsed.max_title_length);
        assert_eq!(config.completion_timeout_secs, parsed.completion_timeout_secs);
        assert_eq!(config.preview_chars, parsed.preview_chars);
    }
}

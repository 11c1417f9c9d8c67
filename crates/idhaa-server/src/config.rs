//! Configuration file parsing for the server.
//!
//! Loads settings from TOML files including bind address, the completion
//! gateway endpoint and credentials, and generator tuning.

use idhaa_extractor::GeneratorConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    pub bind_port: u16,

    /// Completion gateway settings
    pub gateway: GatewayConfig,

    /// Generator tuning (defaults apply when absent)
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Completion gateway settings
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Gateway base URL (e.g., "https://gateway.example.com")
    pub endpoint: String,

    /// Model to request
    pub model: String,

    /// Bearer token for the gateway
    pub api_key: String,
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;

        // Validate required fields
        if config.gateway.endpoint.is_empty() {
            return Err(ConfigError::MissingField("gateway.endpoint".to_string()));
        }
        if config.gateway.api_key.is_empty() {
            return Err(ConfigError::MissingField("gateway.api_key".to_string()));
        }

        Ok(config)
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            gateway: GatewayConfig {
                endpoint: "http://localhost:11434".to_string(),
                model: "radio-script-v1".to_string(),
                api_key: "test-key-do-not-use-in-production".to_string(),
            },
            generator: GeneratorConfig::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default_test_config();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 8080);
        assert_eq!(config.gateway.model, "radio-script-v1");
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig::default_test_config();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000

            [gateway]
            endpoint = "https://gateway.example.com"
            model = "radio-script-v1"
            api_key = "secret"

            [generator]
            max_title_length = 120
            completion_timeout_secs = 60
            preview_chars = 300
        "#;

        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.gateway.endpoint, "https://gateway.example.com");
        assert_eq!(config.generator.max_title_length, 120);
        assert_eq!(config.generator.completion_timeout_secs, 60);
    }

    #[test]
    fn test_generator_defaults_when_absent() {
        let toml = r#"
            bind_address = "127.0.0.1"
            bind_port = 8080

            [gateway]
            endpoint = "https://gateway.example.com"
            model = "radio-script-v1"
            api_key = "secret"
        "#;

        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.generator.completion_timeout_secs, 120); // Default
        assert_eq!(config.generator.preview_chars, 500); // Default
    }
}

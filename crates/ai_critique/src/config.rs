//! Configuration for the critique model

use serde::{Deserialize, Serialize};

/// Configuration for the language-model provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CritiqueConfig {
    /// Anthropic API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// Provider base URL (for custom endpoints and tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens the model may generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// API version header value
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

const fn default_max_tokens() -> u32 {
    1000
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

impl Default for CritiqueConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_ms: default_timeout_ms(),
            api_version: default_api_version(),
        }
    }
}

impl CritiqueConfig {
    /// Create a minimal config for testing
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.is_none() {
            return Err("Anthropic API key is required".to_string());
        }

        if self.model.is_empty() {
            return Err("Model identifier must not be empty".to_string());
        }

        if self.max_tokens == 0 {
            return Err("Max tokens must be greater than 0".to_string());
        }

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

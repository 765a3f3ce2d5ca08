//! Application configuration
//!
//! Loaded once at startup and passed into components at construction;
//! nothing mutates it afterwards. Sources, in order of precedence:
//! `VERSECRAFT_*` environment variables, an optional `config.toml`, then
//! built-in defaults. Nested fields use a double underscore in env vars,
//! e.g. `VERSECRAFT_SPEECH__API_KEY` or `VERSECRAFT_SERVER__PORT`.

use ai_critique::CritiqueConfig;
use ai_speech::SpeechConfig;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Speech synthesis configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Critique model configuration
    #[serde(default)]
    pub critique: CritiqueConfig,

    /// Local artifact storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins (empty = allow all, for development)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Base prefixed onto returned audio URLs; empty yields relative paths
    #[serde(default)]
    pub public_base_url: String,

    /// Graceful shutdown timeout in seconds
    #[serde(default)]
    pub shutdown_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
            public_base_url: String::new(),
            shutdown_timeout_secs: None,
        }
    }
}

/// Local artifact storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory audio artifacts are written to
    #[serde(default = "default_audio_dir")]
    pub audio_dir: String,
}

fn default_audio_dir() -> String {
    "temp_audio".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            audio_dir: default_audio_dir(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("storage.audio_dir", default_audio_dir())?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., VERSECRAFT_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix("VERSECRAFT")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section failure, prefixed with the section name.
    pub fn validate(&self) -> Result<(), String> {
        self.speech
            .validate()
            .map_err(|e| format!("speech: {e}"))?;
        self.critique
            .validate()
            .map_err(|e| format!("critique: {e}"))?;

        if self.storage.audio_dir.is_empty() {
            return Err("storage: audio_dir must not be empty".to_string());
        }

        Ok(())
    }

    /// The socket address string to bind
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert!(config.server.allowed_origins.is_empty());
        assert!(config.server.public_base_url.is_empty());
        assert_eq!(config.storage.audio_dir, "temp_audio");
        assert!(config.speech.api_key.is_none());
        assert!(config.critique.api_key.is_none());
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn validate_fails_without_provider_keys() {
        let config = AppConfig::default();
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("speech:"));
    }

    #[test]
    fn validate_reports_critique_section() {
        let mut config = AppConfig::default();
        config.speech.api_key = Some("fa-key".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("critique:"));
    }

    #[test]
    fn validate_succeeds_with_both_keys() {
        let mut config = AppConfig::default();
        config.speech.api_key = Some("fa-key".to_string());
        config.critique.api_key = Some("sk-key".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_audio_dir() {
        let mut config = AppConfig::default();
        config.speech.api_key = Some("fa-key".to_string());
        config.critique.api_key = Some("sk-key".to_string());
        config.storage.audio_dir = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("storage:"));
    }

    #[test]
    fn config_deserializes_from_toml() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 9001
            allowed_origins = ["http://localhost:5174"]
            public_base_url = "https://poetry.example.com"

            [speech]
            api_key = "fa-key"

            [critique]
            api_key = "sk-key"
            model = "claude-haiku-x"

            [storage]
            audio_dir = "/var/lib/versecraft/audio"
        "#;

        let config: AppConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.server.allowed_origins.len(), 1);
        assert_eq!(config.server.public_base_url, "https://poetry.example.com");
        assert_eq!(config.critique.model, "claude-haiku-x");
        assert_eq!(config.storage.audio_dir, "/var/lib/versecraft/audio");
        // Unspecified sections keep their defaults
        assert_eq!(config.speech.default_voice, "poem");
        assert_eq!(config.critique.max_tokens, 1000);
    }
}

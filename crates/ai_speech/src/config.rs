//! Configuration for speech synthesis

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Configuration for the synthesis provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Fish Audio API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// Provider base URL (for custom endpoints and tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Timeout for the diagnostic probe in milliseconds
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,

    /// Voice name used when the caller omits one or names an unknown voice
    #[serde(default = "default_voice")]
    pub default_voice: String,

    /// Voice name -> provider reference id
    #[serde(default = "default_voices")]
    pub voices: BTreeMap<String, String>,

    /// Sampling temperature sent with every request
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Nucleus sampling threshold sent with every request
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Text chunk length hint for the provider
    #[serde(default = "default_chunk_length")]
    pub chunk_length: u32,

    /// Whether the provider should normalize the input text
    #[serde(default = "default_normalize")]
    pub normalize: bool,

    /// Output codec; artifacts are stored with this extension
    #[serde(default = "default_format")]
    pub format: String,

    /// Latency mode hint
    #[serde(default = "default_latency")]
    pub latency: String,
}

fn default_base_url() -> String {
    "https://api.fish.audio".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

const fn default_probe_timeout_ms() -> u64 {
    10000 // 10 seconds
}

fn default_voice() -> String {
    "poem".to_string()
}

fn default_voices() -> BTreeMap<String, String> {
    [
        ("poem", "2253ebf60c844c36addfd8939f12e5c2"),
        ("poem2", "b66ab2250cc840e1974c53ffa0196d4b"),
        ("spongebob", "54e3a85ac9594ffa83264b8a494b901b"),
        ("horror", "ef9c79b62ef34530bf452c0e50e3c260"),
        ("alle", "59e9dc1cb20c452584788a2690c80970"),
        ("king_von", "15f5e9388ddd4d7cafebb98e0cae8b8e"),
        ("cringe", "e9325769eb0b4ba688c8e36fee36e7ae"),
    ]
    .into_iter()
    .map(|(name, id)| (name.to_string(), id.to_string()))
    .collect()
}

const fn default_temperature() -> f32 {
    0.9
}

const fn default_top_p() -> f32 {
    0.9
}

const fn default_chunk_length() -> u32 {
    200
}

const fn default_normalize() -> bool {
    true
}

fn default_format() -> String {
    "mp3".to_string()
}

fn default_latency() -> String {
    "normal".to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            probe_timeout_ms: default_probe_timeout_ms(),
            default_voice: default_voice(),
            voices: default_voices(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            chunk_length: default_chunk_length(),
            normalize: default_normalize(),
            format: default_format(),
            latency: default_latency(),
        }
    }
}

impl SpeechConfig {
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
            return Err("Fish Audio API key is required".to_string());
        }

        if self.voices.is_empty() {
            return Err("At least one voice must be configured".to_string());
        }

        if !self.voices.contains_key(&self.default_voice) {
            return Err(format!(
                "Default voice '{}' is not in the voice table",
                self.default_voice
            ));
        }

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

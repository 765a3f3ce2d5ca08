//! Types for speech synthesis

use serde::{Deserialize, Serialize};

/// A request to synthesize speech from text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisRequest {
    /// Text to synthesize
    pub text: String,

    /// Pitch multiplier. Accepted for wire compatibility but never
    /// transmitted to the provider.
    #[serde(default = "default_pitch")]
    pub pitch: f32,

    /// Speed multiplier, passed through as the prosody speed
    #[serde(default = "default_speed")]
    pub speed: f32,

    /// Symbolic voice name; unknown names fall back to the default voice
    #[serde(default = "default_voice_name")]
    pub voice_name: String,
}

const fn default_pitch() -> f32 {
    1.0
}

const fn default_speed() -> f32 {
    1.0
}

fn default_voice_name() -> String {
    "poem".to_string()
}

impl SynthesisRequest {
    /// Create a request with default prosody and voice
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pitch: default_pitch(),
            speed: default_speed(),
            voice_name: default_voice_name(),
        }
    }

    /// Set the voice name
    #[must_use]
    pub fn with_voice(mut self, voice_name: impl Into<String>) -> Self {
        self.voice_name = voice_name.into();
        self
    }

    /// Set the speed multiplier
    #[must_use]
    pub const fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }
}

/// Diagnostic report from probing the synthesis provider
///
/// Probes never fail: transport and provider errors are folded into the
/// report so operators can read them without the endpoint erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeReport {
    /// Human-readable provider name
    pub service: String,
    /// HTTP status of the probe, or 0 when the transport failed
    pub status: u16,
    /// Whether the probe succeeded
    pub success: bool,
    /// Provider or transport error text, when not successful
    pub error: Option<String>,
    /// Redacted information about the configured credential
    pub key_info: KeyInfo,
}

/// Redacted credential info; never contains the full key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyInfo {
    /// First four characters of the key, if one is configured
    pub starts_with: Option<String>,
    /// Length of the key (0 when absent)
    pub length: usize,
}

impl KeyInfo {
    /// Build redacted info from an optional credential
    #[must_use]
    pub fn from_key(key: Option<&str>) -> Self {
        Self {
            starts_with: key.map(|k| k.chars().take(4).collect()),
            length: key.map_or(0, str::len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_from_minimal_json() {
        let request: SynthesisRequest = serde_json::from_str(r#"{"text":"hello"}"#).unwrap();
        assert_eq!(request.text, "hello");
        assert!((request.pitch - 1.0).abs() < f32::EPSILON);
        assert!((request.speed - 1.0).abs() < f32::EPSILON);
        assert_eq!(request.voice_name, "poem");
    }

    #[test]
    fn request_builder_sets_fields() {
        let request = SynthesisRequest::new("hi").with_voice("horror").with_speed(1.5);
        assert_eq!(request.voice_name, "horror");
        assert!((request.speed - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn key_info_truncates_to_four_chars() {
        let info = KeyInfo::from_key(Some("abcdef123456"));
        assert_eq!(info.starts_with, Some("abcd".to_string()));
        assert_eq!(info.length, 12);
    }

    #[test]
    fn key_info_handles_short_keys() {
        let info = KeyInfo::from_key(Some("ab"));
        assert_eq!(info.starts_with, Some("ab".to_string()));
        assert_eq!(info.length, 2);
    }

    #[test]
    fn key_info_handles_missing_key() {
        let info = KeyInfo::from_key(None);
        assert_eq!(info.starts_with, None);
        assert_eq!(info.length, 0);
    }

    #[test]
    fn probe_report_serializes_with_key_info() {
        let report = ProbeReport {
            service: "Fish Audio API".to_string(),
            status: 401,
            success: false,
            error: Some("unauthorized".to_string()),
            key_info: KeyInfo::from_key(Some("eca51db394")),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"status\":401"));
        assert!(json.contains("\"starts_with\":\"eca5\""));
        assert!(!json.contains("eca51db394"));
    }
}

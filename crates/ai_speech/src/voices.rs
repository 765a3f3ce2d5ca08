//! Voice catalog
//!
//! Immutable mapping from symbolic voice names to provider reference ids,
//! built once from configuration. Unknown names resolve to the default
//! voice instead of erroring; a bad voice pick is a low-stakes parameter
//! and correcting it beats rejecting the request.

use std::collections::BTreeMap;

use crate::error::SpeechError;

/// Read-only voice name -> provider reference id mapping
#[derive(Debug, Clone)]
pub struct VoiceCatalog {
    voices: BTreeMap<String, String>,
    default_voice: String,
}

impl VoiceCatalog {
    /// Build a catalog from a voice table and a default voice name
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the table is empty or the
    /// default voice is not in it.
    pub fn new(
        voices: BTreeMap<String, String>,
        default_voice: impl Into<String>,
    ) -> Result<Self, SpeechError> {
        let default_voice = default_voice.into();

        if voices.is_empty() {
            return Err(SpeechError::Configuration(
                "Voice table is empty".to_string(),
            ));
        }

        if !voices.contains_key(&default_voice) {
            return Err(SpeechError::Configuration(format!(
                "Default voice '{default_voice}' is not in the voice table"
            )));
        }

        Ok(Self {
            voices,
            default_voice,
        })
    }

    /// Resolve a symbolic voice name to the provider's reference id
    ///
    /// Unknown names silently resolve to the default voice. This never
    /// fails: the catalog invariant guarantees the default is present.
    #[must_use]
    pub fn resolve(&self, name: &str) -> &str {
        self.voices
            .get(name)
            .or_else(|| self.voices.get(&self.default_voice))
            .map_or("", String::as_str)
    }

    /// Configured voice names, in stable order
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.voices.keys().cloned().collect()
    }

    /// The default voice name
    #[must_use]
    pub fn default_voice(&self) -> &str {
        &self.default_voice
    }

    /// Whether a voice name is configured
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.voices.contains_key(name)
    }
}

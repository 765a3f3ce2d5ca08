//! Fish Audio synthesis provider
//!
//! Implements `TextToSpeech` against the Fish Audio TTS endpoint. One
//! synchronous call per request, bounded by the configured timeout, no
//! retries: a provider error, timeout, or empty body is terminal for the
//! request.
//!
//! The provider's error text is propagated verbatim in
//! `SpeechError::SynthesisFailed`. That aids debugging against a moving
//! third-party API; callers that must not leak upstream detail should wrap
//! this error before exposing it.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::{KeyInfo, ProbeReport, SynthesisRequest};
use crate::voices::VoiceCatalog;

const SERVICE_NAME: &str = "Fish Audio API";

/// Fish Audio TTS provider
#[derive(Debug, Clone)]
pub struct FishAudioProvider {
    client: Client,
    config: SpeechConfig,
    catalog: VoiceCatalog,
}

impl FishAudioProvider {
    /// Create a new Fish Audio provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is
    /// invalid or the HTTP client cannot be built.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let catalog = VoiceCatalog::new(config.voices.clone(), config.default_voice.clone())?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            config,
            catalog,
        })
    }

    /// Get the API key
    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }

    /// Build the TTS endpoint URL
    fn tts_url(&self) -> String {
        format!("{}/v1/tts", self.config.base_url)
    }
}

/// Fish Audio TTS request body
///
/// `pitch` from the inbound request has no counterpart here: the field is
/// accepted at the API surface but not transmitted upstream.
#[derive(Debug, Serialize)]
struct TtsPayload<'a> {
    text: &'a str,
    reference_id: &'a str,
    temperature: f32,
    top_p: f32,
    prosody: Prosody,
    chunk_length: u32,
    normalize: bool,
    format: &'a str,
    latency: &'a str,
}

/// Prosody block; volume is pinned to neutral
#[derive(Debug, Serialize)]
struct Prosody {
    speed: f32,
    volume: f32,
}

/// Minimal payload used by the diagnostic probe
#[derive(Debug, Serialize)]
struct ProbePayload<'a> {
    text: &'a str,
    reference_id: &'a str,
    format: &'a str,
}

#[async_trait]
impl TextToSpeech for FishAudioProvider {
    #[instrument(skip(self, request), fields(text_len = request.text.len(), voice = %request.voice_name))]
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, SpeechError> {
        let reference_id = self.catalog.resolve(&request.voice_name);

        debug!(reference_id = %reference_id, "Synthesizing speech with Fish Audio");

        let payload = TtsPayload {
            text: &request.text,
            reference_id,
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            prosody: Prosody {
                speed: request.speed,
                volume: 0.0,
            },
            chunk_length: self.config.chunk_length,
            normalize: self.config.normalize,
            format: &self.config.format,
            latency: &self.config.latency,
        };

        let response = self
            .client
            .post(self.tts_url())
            .bearer_auth(self.api_key())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Fish Audio request failed");
            return Err(SpeechError::SynthesisFailed(error_body));
        }

        let audio_bytes: Bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::RequestFailed(format!("Failed to read audio: {e}")))?;

        if audio_bytes.is_empty() {
            warn!("Fish Audio returned success with an empty body");
            return Err(SpeechError::EmptyAudio);
        }

        debug!(audio_size = audio_bytes.len(), "Speech synthesis complete");

        Ok(audio_bytes.to_vec())
    }

    #[instrument(skip(self))]
    async fn probe(&self) -> ProbeReport {
        let key_info = KeyInfo::from_key(self.config.api_key.as_deref());

        let payload = ProbePayload {
            text: "test",
            reference_id: self.catalog.resolve(self.catalog.default_voice()),
            format: "mp3",
        };

        debug!("Probing Fish Audio connectivity");

        let result = self
            .client
            .post(self.tts_url())
            .bearer_auth(self.api_key())
            .json(&payload)
            .timeout(Duration::from_millis(self.config.probe_timeout_ms))
            .send()
            .await;

        match result {
            Ok(response) => {
                let status = response.status().as_u16();
                let success = response.status().is_success();
                let error = if success {
                    None
                } else {
                    Some(response.text().await.unwrap_or_default())
                };

                ProbeReport {
                    service: SERVICE_NAME.to_string(),
                    status,
                    success,
                    error,
                    key_info,
                }
            },
            Err(e) => {
                warn!(error = %e, "Fish Audio probe failed to connect");
                ProbeReport {
                    service: SERVICE_NAME.to_string(),
                    status: 0,
                    success: false,
                    error: Some(e.to_string()),
                    key_info,
                }
            },
        }
    }

    fn catalog(&self) -> &VoiceCatalog {
        &self.catalog
    }
}

//! Port definitions for speech synthesis
//!
//! Defines the trait (port) that synthesis adapters must implement.

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::{ProbeReport, SynthesisRequest};
use crate::voices::VoiceCatalog;

/// Port for Text-to-Speech implementations
///
/// # Example
///
/// ```ignore
/// use ai_speech::{SynthesisRequest, TextToSpeech};
///
/// async fn read_aloud(
///     tts: &impl TextToSpeech,
///     text: &str,
/// ) -> Result<Vec<u8>, ai_speech::SpeechError> {
///     tts.synthesize(&SynthesisRequest::new(text)).await
/// }
/// ```
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize speech for a request, returning raw audio bytes
    ///
    /// The request's voice name is resolved through the provider's voice
    /// catalog; unknown names use the default voice.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` when the provider call fails, times out,
    /// returns a non-success status, or returns an empty body.
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, SpeechError>;

    /// Probe the provider with a minimal fixed payload
    ///
    /// Never fails; failures are described inside the report.
    async fn probe(&self) -> ProbeReport;

    /// The provider's voice catalog
    fn catalog(&self) -> &VoiceCatalog;
}

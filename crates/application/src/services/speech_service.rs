//! Speech service - Orchestrates the synthesis pipeline
//!
//! Runs the two-stage flow: invoke the provider for audio bytes, then hand
//! them to the store for a handle. The stages stay separate so either side
//! can be substituted in tests; nothing is written when the provider call
//! fails.

use std::{fmt, sync::Arc};

use ai_speech::{ProbeReport, SynthesisRequest, TextToSpeech};
use domain::AudioId;
use tracing::{debug, info, instrument, warn};

use crate::{error::ApplicationError, ports::AudioStore};

/// Service for speech synthesis and artifact retrieval
pub struct SpeechService {
    synthesizer: Arc<dyn TextToSpeech>,
    store: Arc<dyn AudioStore>,
}

impl fmt::Debug for SpeechService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechService").finish_non_exhaustive()
    }
}

impl SpeechService {
    /// Create a new speech service
    pub fn new(synthesizer: Arc<dyn TextToSpeech>, store: Arc<dyn AudioStore>) -> Self {
        Self { synthesizer, store }
    }

    /// Synthesize speech and persist the result
    ///
    /// # Errors
    ///
    /// Returns the provider failure (or storage failure) for this request;
    /// no retry is attempted and no artifact exists after a failure.
    #[instrument(skip(self, request), fields(text_len = request.text.len(), voice = %request.voice_name))]
    pub async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioId, ApplicationError> {
        // Stage 1: provider call
        let audio = match self.synthesizer.synthesize(request).await {
            Ok(audio) => audio,
            Err(e) => {
                warn!(error = %e, "Speech synthesis failed");
                return Err(e.into());
            },
        };

        debug!(audio_size = audio.len(), "Audio received from provider");

        // Stage 2: persist under a fresh handle
        let id = self.store.store(&audio).await?;

        info!(audio_id = %id, "Audio artifact stored");

        Ok(id)
    }

    /// Fetch a stored artifact by handle; `None` when it does not exist
    pub async fn fetch_audio(&self, id: &AudioId) -> Result<Option<Vec<u8>>, ApplicationError> {
        self.store.fetch(id).await
    }

    /// Configured voice names, in stable order
    #[must_use]
    pub fn voice_names(&self) -> Vec<String> {
        self.synthesizer.catalog().names()
    }

    /// Probe the synthesis provider
    pub async fn probe(&self) -> ProbeReport {
        self.synthesizer.probe().await
    }
}

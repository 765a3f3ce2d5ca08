//! Application state shared across handlers

use std::sync::Arc;

use application::{CritiqueService, SpeechService};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Speech synthesis and artifact retrieval
    pub speech_service: Arc<SpeechService>,
    /// Poem critique
    pub critique_service: Arc<CritiqueService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

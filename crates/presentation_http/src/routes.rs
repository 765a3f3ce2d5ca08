//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // TTS API
        .route("/api/voices", get(handlers::tts::get_voices))
        .route("/api/tts", post(handlers::tts::generate_speech))
        // Audio serving
        .route("/audio/{audio_id}", get(handlers::audio::get_audio))
        // Analysis API
        .route("/api/analyze-poem", post(handlers::analysis::analyze_poem))
        // Diagnostics
        .route(
            "/api/debug/check-fish-audio",
            get(handlers::diagnostics::check_fish_audio),
        )
        // Attach state
        .with_state(state)
}

//! Speech synthesis handlers

use ai_speech::SynthesisRequest;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::instrument;
use utoipa::ToSchema;

use crate::{error::ApiError, state::AppState};

/// Synthesis request body
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({"text": "cold moon hums", "voice_name": "poem", "speed": 1.0}))]
pub struct TtsRequest {
    /// Text to synthesize
    pub text: String,
    /// Pitch multiplier; accepted but not forwarded to the provider
    #[serde(default = "default_pitch")]
    pub pitch: f32,
    /// Speed multiplier
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Symbolic voice name; unknown names use the default voice
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

/// Synthesis response body
#[derive(Debug, Serialize, ToSchema)]
pub struct TtsResponse {
    /// Fetchable reference to the generated artifact
    pub audio_url: String,
}

/// Voice listing response body
#[derive(Debug, Serialize, ToSchema)]
pub struct VoicesResponse {
    /// Configured voice names
    pub voices: Vec<String>,
}

/// List available voice names
#[utoipa::path(
    get,
    path = "/api/voices",
    tag = "tts",
    responses(
        (status = 200, description = "Configured voices", body = VoicesResponse)
    )
)]
pub async fn get_voices(State(state): State<AppState>) -> Json<VoicesResponse> {
    Json(VoicesResponse {
        voices: state.speech_service.voice_names(),
    })
}

/// Synthesize speech and return a reference to the stored audio
#[utoipa::path(
    post,
    path = "/api/tts",
    tag = "tts",
    request_body = TtsRequest,
    responses(
        (status = 200, description = "Audio generated", body = TtsResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 502, description = "Provider failure", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(text_len = request.text.len(), voice = %request.voice_name))]
pub async fn generate_speech(
    State(state): State<AppState>,
    Json(request): Json<TtsRequest>,
) -> Result<Json<TtsResponse>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::BadRequest("Text cannot be empty".to_string()));
    }

    let synthesis = SynthesisRequest {
        text: request.text,
        pitch: request.pitch,
        speed: request.speed,
        voice_name: request.voice_name,
    };

    let id = state.speech_service.synthesize(&synthesis).await?;

    Ok(Json(TtsResponse {
        audio_url: format!("{}/audio/{id}", state.config.server.public_base_url),
    }))
}

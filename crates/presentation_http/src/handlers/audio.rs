//! Audio artifact serving

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use domain::AudioId;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Serve a stored audio artifact by handle
///
/// A malformed handle gets the same 404 as an unknown one; callers cannot
/// distinguish "never existed" from "not a handle".
#[utoipa::path(
    get,
    path = "/audio/{audio_id}",
    tag = "audio",
    params(
        ("audio_id" = String, Path, description = "Audio artifact handle")
    ),
    responses(
        (status = 200, description = "Audio content", body = Vec<u8>, content_type = "audio/mpeg"),
        (status = 404, description = "Unknown handle", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_audio(
    State(state): State<AppState>,
    Path(audio_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = AudioId::parse(&audio_id)
        .map_err(|_| ApiError::NotFound("Audio not found".to_string()))?;

    let bytes = state
        .speech_service
        .fetch_audio(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Audio not found".to_string()))?;

    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], bytes))
}

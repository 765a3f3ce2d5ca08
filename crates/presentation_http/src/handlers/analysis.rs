//! Poem analysis handlers

use axum::{Json, extract::State};
use domain::PoemCritique;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::instrument;
use utoipa::ToSchema;

use crate::{error::ApiError, state::AppState};

/// Poem analysis request body
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({"text": "cold moon hums over the quiet road"}))]
pub struct PoemAnalysisRequest {
    /// The poem to critique
    pub text: String,
}

/// Poem analysis response body
#[derive(Debug, Serialize, ToSchema)]
pub struct PoemAnalysisResponse {
    /// Overall score (the prompt asks for 6-10)
    pub score: i64,
    /// What the poem does well
    pub strengths: Vec<String>,
    /// Gentle, optional suggestions
    pub improvements: Vec<String>,
    /// Literary devices recognized in the text
    pub literary_devices: Vec<String>,
    /// One word describing the vibe
    pub mood: String,
}

impl From<PoemCritique> for PoemAnalysisResponse {
    fn from(critique: PoemCritique) -> Self {
        Self {
            score: critique.score,
            strengths: critique.strengths,
            improvements: critique.improvements,
            literary_devices: critique.literary_devices,
            mood: critique.mood,
        }
    }
}

/// Analyze a poem and return structured feedback
#[utoipa::path(
    post,
    path = "/api/analyze-poem",
    tag = "analysis",
    request_body = PoemAnalysisRequest,
    responses(
        (status = 200, description = "Structured critique", body = PoemAnalysisResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 502, description = "Provider or parse failure", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(poem_len = request.text.len()))]
pub async fn analyze_poem(
    State(state): State<AppState>,
    Json(request): Json<PoemAnalysisRequest>,
) -> Result<Json<PoemAnalysisResponse>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::BadRequest("Poem cannot be empty".to_string()));
    }

    let critique = state.critique_service.critique(&request.text).await?;

    Ok(Json(critique.into()))
}

//! Provider diagnostics handlers
//!
//! Read-only connectivity checks. Failures are reported inside the
//! payload, never as error responses, so an operator can always read the
//! outcome.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::state::AppState;

/// Provider probe response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ProbeResponse {
    /// Probed service name
    pub service: String,
    /// HTTP status of the probe, or 0 when the transport failed
    pub status: u16,
    /// Whether the probe succeeded
    pub success: bool,
    /// Provider or transport error text, when not successful
    pub error: Option<String>,
    /// Redacted credential info
    pub key_info: KeyInfoResponse,
}

/// Redacted credential info
#[derive(Debug, Serialize, ToSchema)]
pub struct KeyInfoResponse {
    /// First characters of the configured key
    pub starts_with: Option<String>,
    /// Length of the configured key
    pub length: usize,
}

impl From<ai_speech::ProbeReport> for ProbeResponse {
    fn from(report: ai_speech::ProbeReport) -> Self {
        Self {
            service: report.service,
            status: report.status,
            success: report.success,
            error: report.error,
            key_info: KeyInfoResponse {
                starts_with: report.key_info.starts_with,
                length: report.key_info.length,
            },
        }
    }
}

/// Check connectivity and credentials against the TTS provider
#[utoipa::path(
    get,
    path = "/api/debug/check-fish-audio",
    tag = "diagnostics",
    responses(
        (status = 200, description = "Probe outcome, success or not", body = ProbeResponse)
    )
)]
#[instrument(skip(state))]
pub async fn check_fish_audio(State(state): State<AppState>) -> Json<ProbeResponse> {
    Json(state.speech_service.probe().await.into())
}

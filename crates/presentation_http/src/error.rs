//! API error handling
//!
//! Maps application failures to HTTP responses with a stable error code
//! per failure class. Provider failures surface as 502 with the remote
//! service's own text as the detail. That transparency is deliberate (it
//! makes third-party failures debuggable from the client) and assumes the
//! providers do not echo credentials into their error bodies.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Synthesis failed: {0}")]
    Synthesis(String),

    #[error("Synthesis produced no audio")]
    EmptyAudio,

    #[error("Analysis failed: {0}")]
    Analysis(String),

    #[error("Analysis reply unparseable: {0}")]
    Parse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error detail
    pub error: String,
    /// Stable error code
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            Self::Synthesis(msg) => (StatusCode::BAD_GATEWAY, "synthesis_failed", msg),
            Self::EmptyAudio => (
                StatusCode::BAD_GATEWAY,
                "empty_audio",
                "Provider returned no audio".to_string(),
            ),
            Self::Analysis(msg) => (StatusCode::BAD_GATEWAY, "analysis_failed", msg),
            Self::Parse(msg) => (StatusCode::BAD_GATEWAY, "parse_failed", msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::Synthesis(msg) => Self::Synthesis(msg),
            ApplicationError::EmptyAudio => Self::EmptyAudio,
            ApplicationError::Analysis(msg) => Self::Analysis(msg),
            ApplicationError::Parse(msg) => Self::Parse(msg),
            ApplicationError::NotFound(msg) => Self::NotFound(msg),
            ApplicationError::Storage(msg)
            | ApplicationError::Configuration(msg)
            | ApplicationError::Internal(msg) => Self::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_bad_request_message() {
        let err = ApiError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn api_error_not_found_message() {
        let err = ApiError::NotFound("audio abc".to_string());
        assert_eq!(err.to_string(), "Not found: audio abc");
    }

    #[test]
    fn api_error_synthesis_carries_detail() {
        let err = ApiError::Synthesis("Invalid API key".to_string());
        assert_eq!(err.to_string(), "Synthesis failed: Invalid API key");
    }

    #[test]
    fn error_response_serialization() {
        let resp = ErrorResponse {
            error: "Bad request".to_string(),
            code: "bad_request".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"error\""));
        assert!(json.contains("\"code\""));
    }

    #[test]
    fn application_synthesis_converts() {
        let source = ApplicationError::Synthesis("upstream text".to_string());
        let result: ApiError = source.into();
        match result {
            ApiError::Synthesis(msg) => assert_eq!(msg, "upstream text"),
            other => unreachable!("Expected Synthesis, got {other:?}"),
        }
    }

    #[test]
    fn application_empty_audio_converts() {
        let result: ApiError = ApplicationError::EmptyAudio.into();
        assert!(matches!(result, ApiError::EmptyAudio));
    }

    #[test]
    fn application_parse_converts() {
        let result: ApiError = ApplicationError::Parse("no JSON".to_string()).into();
        assert!(matches!(result, ApiError::Parse(_)));
    }

    #[test]
    fn application_not_found_converts() {
        let result: ApiError = ApplicationError::NotFound("audio".to_string()).into();
        assert!(matches!(result, ApiError::NotFound(_)));
    }

    #[test]
    fn application_storage_converts_to_internal() {
        let result: ApiError = ApplicationError::Storage("disk full".to_string()).into();
        assert!(matches!(result, ApiError::Internal(_)));
    }

    #[test]
    fn into_response_bad_request() {
        let response = ApiError::BadRequest("invalid".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn into_response_not_found() {
        let response = ApiError::NotFound("audio".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn into_response_provider_failures_are_bad_gateway() {
        for err in [
            ApiError::Synthesis("x".to_string()),
            ApiError::EmptyAudio,
            ApiError::Analysis("x".to_string()),
            ApiError::Parse("x".to_string()),
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        }
    }

    #[test]
    fn into_response_internal() {
        let response = ApiError::Internal("crash".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! OpenAPI documentation module
//!
//! Provides OpenAPI 3.0 documentation for the VerseCraft HTTP API with
//! Swagger UI for interactive exploration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;

/// OpenAPI documentation for VerseCraft
#[derive(OpenApi)]
#[openapi(
    info(
        title = "VerseCraft API",
        version = "0.1.0",
        description = "Poetry backend: speech synthesis for poems and LLM-based critique",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "tts", description = "Speech synthesis endpoints"),
        (name = "audio", description = "Generated audio serving"),
        (name = "analysis", description = "Poem critique endpoints"),
        (name = "diagnostics", description = "Provider connectivity checks")
    ),
    paths(
        handlers::health::health_check,
        handlers::tts::get_voices,
        handlers::tts::generate_speech,
        handlers::audio::get_audio,
        handlers::analysis::analyze_poem,
        handlers::diagnostics::check_fish_audio,
    ),
    components(
        schemas(
            handlers::health::HealthResponse,
            handlers::tts::TtsRequest,
            handlers::tts::TtsResponse,
            handlers::tts::VoicesResponse,
            handlers::analysis::PoemAnalysisRequest,
            handlers::analysis::PoemAnalysisResponse,
            handlers::diagnostics::ProbeResponse,
            handlers::diagnostics::KeyInfoResponse,
            crate::error::ErrorResponse,
        )
    )
)]
pub struct ApiDoc;

/// Router serving the Swagger UI and the OpenAPI document
pub fn swagger_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

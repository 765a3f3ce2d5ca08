//! Application-level errors
//!
//! The four caller-visible failure classes are kept distinct: provider
//! failures (synthesis/analysis), an empty synthesis result, a missing
//! artifact, and an unparseable critique reply. Provider detail strings
//! are carried through unchanged.

use ai_critique::CritiqueError;
use ai_speech::SpeechError;
use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Speech provider failure; carries the provider's raw detail
    #[error("Synthesis failed: {0}")]
    Synthesis(String),

    /// Speech provider answered success but produced zero audio bytes
    #[error("Synthesis produced no audio")]
    EmptyAudio,

    /// Critique provider failure; carries the provider's message
    #[error("Analysis failed: {0}")]
    Analysis(String),

    /// Critique reply could not be resolved to the expected shape
    #[error("Analysis reply unparseable: {0}")]
    Parse(String),

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Local storage failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<SpeechError> for ApplicationError {
    fn from(err: SpeechError) -> Self {
        match err {
            SpeechError::EmptyAudio => Self::EmptyAudio,
            SpeechError::Configuration(msg) => Self::Configuration(msg),
            // Provider error text passes through verbatim
            SpeechError::SynthesisFailed(detail) => Self::Synthesis(detail),
            other => Self::Synthesis(other.to_string()),
        }
    }
}

impl From<CritiqueError> for ApplicationError {
    fn from(err: CritiqueError) -> Self {
        match err {
            CritiqueError::Parse(msg) => Self::Parse(msg),
            CritiqueError::Configuration(msg) => Self::Configuration(msg),
            CritiqueError::ServerError(detail) => Self::Analysis(detail),
            other => Self::Analysis(other.to_string()),
        }
    }
}

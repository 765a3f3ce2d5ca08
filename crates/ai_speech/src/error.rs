//! Speech synthesis errors

use thiserror::Error;

/// Errors that can occur during speech synthesis
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Failed to connect to the synthesis provider
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the synthesis provider failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Provider rejected the request; carries the provider's raw error text
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Provider answered with success but returned zero audio bytes
    #[error("Provider returned empty audio")]
    EmptyAudio,

    /// Timeout during synthesis
    #[error("Synthesis timeout after {0}ms")]
    Timeout(u64),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for SpeechError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(30000)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_failed_error_message() {
        let err = SpeechError::ConnectionFailed("refused".to_string());
        assert_eq!(err.to_string(), "Connection failed: refused");
    }

    #[test]
    fn request_failed_error_message() {
        let err = SpeechError::RequestFailed("500 error".to_string());
        assert_eq!(err.to_string(), "Request failed: 500 error");
    }

    #[test]
    fn synthesis_failed_carries_provider_text() {
        let err = SpeechError::SynthesisFailed("{\"detail\":\"bad key\"}".to_string());
        assert_eq!(err.to_string(), "Synthesis failed: {\"detail\":\"bad key\"}");
    }

    #[test]
    fn empty_audio_error_message() {
        let err = SpeechError::EmptyAudio;
        assert_eq!(err.to_string(), "Provider returned empty audio");
    }

    #[test]
    fn timeout_error_message() {
        let err = SpeechError::Timeout(30000);
        assert_eq!(err.to_string(), "Synthesis timeout after 30000ms");
    }

    #[test]
    fn configuration_error_message() {
        let err = SpeechError::Configuration("missing API key".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing API key");
    }
}

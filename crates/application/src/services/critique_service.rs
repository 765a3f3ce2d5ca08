//! Critique service - Orchestrates the analysis pipeline
//!
//! Build the prompt, invoke the model once, resolve the reply. Each step
//! fails the whole request; there is no retry and no partial critique.

use std::{fmt, sync::Arc};

use ai_critique::{CritiqueModel, critique_prompt, extract_critique};
use domain::PoemCritique;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;

/// Service for poem critique
pub struct CritiqueService {
    model: Arc<dyn CritiqueModel>,
}

impl fmt::Debug for CritiqueService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CritiqueService").finish_non_exhaustive()
    }
}

impl CritiqueService {
    /// Create a new critique service
    pub fn new(model: Arc<dyn CritiqueModel>) -> Self {
        Self { model }
    }

    /// Critique a poem
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Analysis` on provider failures and
    /// `ApplicationError::Parse` when the reply cannot be resolved to a
    /// structured critique.
    #[instrument(skip(self, poem_text), fields(poem_len = poem_text.len()))]
    pub async fn critique(&self, poem_text: &str) -> Result<PoemCritique, ApplicationError> {
        let prompt = critique_prompt(poem_text);

        let reply = match self.model.complete(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "Critique model call failed");
                return Err(e.into());
            },
        };

        debug!(reply_len = reply.len(), "Critique reply received");

        let critique = extract_critique(&reply)?;

        info!(score = critique.score, "Poem critique complete");

        Ok(critique)
    }

    /// The configured model identifier
    #[must_use]
    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_critique::CritiqueError;
    use async_trait::async_trait;

    struct FakeModel {
        reply: Result<String, CritiqueError>,
    }

    #[async_trait]
    impl CritiqueModel for FakeModel {
        async fn complete(&self, prompt: &str) -> Result<String, CritiqueError> {
            // The service must send the full built prompt, not the bare poem.
            assert!(prompt.contains("poetry mentor"));
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err(CritiqueError::ServerError(msg)) => {
                    Err(CritiqueError::ServerError(msg.clone()))
                },
                Err(e) => Err(CritiqueError::RequestFailed(e.to_string())),
            }
        }

        fn model_name(&self) -> &str {
            "fake-model"
        }
    }

    fn critique_json() -> String {
        serde_json::json!({
            "score": 9,
            "strengths": ["Love how you flipped the ending"],
            "improvements": [],
            "literary_devices": ["irony"],
            "mood": "playful"
        })
        .to_string()
    }

    #[tokio::test]
    async fn bare_reply_resolves_to_critique() {
        let service = CritiqueService::new(Arc::new(FakeModel {
            reply: Ok(critique_json()),
        }));

        let critique = service.critique("sun eats the road").await.unwrap();

        assert_eq!(critique.score, 9);
        assert_eq!(critique.mood, "playful");
    }

    #[tokio::test]
    async fn fenced_reply_resolves_to_critique() {
        let service = CritiqueService::new(Arc::new(FakeModel {
            reply: Ok(format!("```json\n{}\n```", critique_json())),
        }));

        let critique = service.critique("sun eats the road").await.unwrap();

        assert_eq!(critique.score, 9);
    }

    #[tokio::test]
    async fn provider_failure_surfaces_as_analysis_error() {
        let service = CritiqueService::new(Arc::new(FakeModel {
            reply: Err(CritiqueError::ServerError("Overloaded".to_string())),
        }));

        let err = service.critique("x").await.unwrap_err();

        assert_eq!(err.to_string(), "Analysis failed: Overloaded");
    }

    #[tokio::test]
    async fn unparseable_reply_is_a_parse_error() {
        let service = CritiqueService::new(Arc::new(FakeModel {
            reply: Ok("lovely poem, 8/10".to_string()),
        }));

        let err = service.critique("x").await.unwrap_err();

        assert!(matches!(err, ApplicationError::Parse(_)));
    }

    #[test]
    fn model_name_passes_through() {
        let service = CritiqueService::new(Arc::new(FakeModel {
            reply: Ok(String::new()),
        }));
        assert_eq!(service.model_name(), "fake-model");
    }
}

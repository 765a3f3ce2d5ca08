//! Port definition for critique model providers

use async_trait::async_trait;

use crate::error::CritiqueError;

/// Port for language-model completion providers
///
/// Implementations make a single bounded call and return the raw reply
/// text; structured parsing happens downstream in [`crate::extract`].
#[async_trait]
pub trait CritiqueModel: Send + Sync {
    /// Send a prompt and return the model's raw reply text
    ///
    /// # Errors
    ///
    /// Returns `CritiqueError` when the provider call fails, times out, or
    /// returns a non-success status. No retries are attempted.
    async fn complete(&self, prompt: &str) -> Result<String, CritiqueError>;

    /// The configured model identifier
    fn model_name(&self) -> &str;
}

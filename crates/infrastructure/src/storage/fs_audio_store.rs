//! Filesystem-backed audio store
//!
//! Artifacts live as `<dir>/<uuid>.mp3`, one file per handle. The
//! filesystem namespace is the only index; there is no eviction or size
//! bound, so the directory grows until cleaned externally.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use application::{ApplicationError, AudioStore};
use async_trait::async_trait;
use domain::AudioId;
use tokio::fs;
use tracing::{debug, instrument};

/// Audio store writing artifacts to a local directory
#[derive(Debug, Clone)]
pub struct FsAudioStore {
    root: PathBuf,
}

impl FsAudioStore {
    /// Create a store rooted at `root`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Storage` if the directory cannot be
    /// created.
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self, ApplicationError> {
        let root = root.into();

        fs::create_dir_all(&root).await.map_err(|e| {
            ApplicationError::Storage(format!(
                "Failed to create audio directory {}: {e}",
                root.display()
            ))
        })?;

        Ok(Self { root })
    }

    /// The directory artifacts are written to
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &AudioId) -> PathBuf {
        self.root.join(format!("{id}.mp3"))
    }
}

#[async_trait]
impl AudioStore for FsAudioStore {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn store(&self, bytes: &[u8]) -> Result<AudioId, ApplicationError> {
        let id = AudioId::new();
        let path = self.path_for(&id);

        fs::write(&path, bytes).await.map_err(|e| {
            ApplicationError::Storage(format!("Failed to write {}: {e}", path.display()))
        })?;

        debug!(audio_id = %id, "Audio artifact written");

        Ok(id)
    }

    #[instrument(skip(self), fields(audio_id = %id))]
    async fn fetch(&self, id: &AudioId) -> Result<Option<Vec<u8>>, ApplicationError> {
        let path = self.path_for(id);

        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ApplicationError::Storage(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }
}

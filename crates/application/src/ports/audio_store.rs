//! Audio store port - Interface for persisting synthesized audio

use async_trait::async_trait;
use domain::AudioId;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for audio artifact storage
///
/// Each `store` call mints a fresh handle; handles are never reused and
/// collisions are not checked for. A missing artifact is `Ok(None)`, kept
/// distinct from storage failures.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AudioStore: Send + Sync {
    /// Persist audio bytes under a newly minted handle
    async fn store(&self, bytes: &[u8]) -> Result<AudioId, ApplicationError>;

    /// Fetch the bytes stored under a handle, or `None` if absent
    async fn fetch(&self, id: &AudioId) -> Result<Option<Vec<u8>>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    /// In-memory reference implementation of the port contract
    struct MemoryStore {
        artifacts: RwLock<HashMap<AudioId, Vec<u8>>>,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self {
                artifacts: RwLock::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl AudioStore for MemoryStore {
        async fn store(&self, bytes: &[u8]) -> Result<AudioId, ApplicationError> {
            let id = AudioId::new();
            self.artifacts.write().await.insert(id, bytes.to_vec());
            Ok(id)
        }

        async fn fetch(&self, id: &AudioId) -> Result<Option<Vec<u8>>, ApplicationError> {
            Ok(self.artifacts.read().await.get(id).cloned())
        }
    }

    #[tokio::test]
    async fn store_then_fetch_roundtrips() {
        let store = MemoryStore::new();
        let id = store.store(&[1, 2, 3]).await.unwrap();
        let bytes = store.fetch(&id).await.unwrap();
        assert_eq!(bytes, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn fetch_of_unissued_handle_is_none() {
        let store = MemoryStore::new();
        let bytes = store.fetch(&AudioId::new()).await.unwrap();
        assert_eq!(bytes, None);
    }

    #[tokio::test]
    async fn two_stores_mint_distinct_handles() {
        let store = MemoryStore::new();
        let id1 = store.store(&[1]).await.unwrap();
        let id2 = store.store(&[1]).await.unwrap();
        assert_ne!(id1, id2);
    }

    #[tokio::test]
    async fn automock_can_fail_storage() {
        let mut mock = MockAudioStore::new();
        mock.expect_store()
            .returning(|_| Err(ApplicationError::Storage("disk full".to_string())));

        let result = mock.store(&[1, 2]).await;

        assert!(matches!(result, Err(ApplicationError::Storage(_))));
    }
}

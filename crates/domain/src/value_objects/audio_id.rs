//! Audio artifact identifier
//!
//! An opaque handle minted when synthesized audio is stored. One handle per
//! stored artifact; handles are never reused.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique handle for a stored audio artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioId(Uuid);

impl AudioId {
    /// Mint a new random audio handle
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an audio handle from an existing UUID
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse an audio handle from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid UUID.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Get the underlying UUID
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AudioId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AudioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for AudioId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_audio_id_is_unique() {
        let id1 = AudioId::new();
        let id2 = AudioId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn audio_id_roundtrips_through_string() {
        let original = AudioId::new();
        let parsed = AudioId::parse(&original.to_string()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn from_uuid() {
        let uuid = Uuid::new_v4();
        let id = AudioId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
    }

    #[test]
    fn display_format() {
        let uuid = Uuid::new_v4();
        let id = AudioId::from_uuid(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn default_creates_new_id() {
        let id1 = AudioId::default();
        let id2 = AudioId::default();
        assert_ne!(id1, id2);
    }

    #[test]
    fn parse_invalid_returns_error() {
        assert!(AudioId::parse("not-a-uuid").is_err());
    }

    #[test]
    fn serializes_as_uuid_string() {
        let id = AudioId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}

//! Port definitions for the application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement them.
//! The provider-facing ports (`TextToSpeech`, `CritiqueModel`) live with
//! their boundary crates; only storage is owned here.

mod audio_store;

pub use audio_store::AudioStore;

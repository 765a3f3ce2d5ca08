//! AI Critique - Language-model poem critique boundary
//!
//! Builds a deterministic critique prompt, invokes a remote language-model
//! provider, and defensively parses the free-text reply into a
//! [`domain::PoemCritique`].
//!
//! The model is instructed to answer with a single JSON object, but that
//! instruction is treated as a hint rather than a contract: replies wrapped
//! in a formatting fence are unwrapped by [`extract::extract_critique`]
//! before anything is rejected.

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod ports;
pub mod prompt;

pub use client::AnthropicClient;
pub use config::CritiqueConfig;
pub use error::CritiqueError;
pub use extract::extract_critique;
pub use ports::CritiqueModel;
pub use prompt::critique_prompt;

//! Application layer - Use cases and orchestration
//!
//! Orchestrates the provider boundaries (`ai_speech`, `ai_critique`) and
//! the storage port into the two request pipelines: synthesize-and-store,
//! and critique.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;

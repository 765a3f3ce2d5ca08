//! Infrastructure layer - Adapters and configuration
//!
//! Implements the application's storage port against the local filesystem
//! and loads the process-wide configuration.

pub mod config;
pub mod storage;

pub use config::{AppConfig, ServerConfig, StorageConfig};
pub use storage::FsAudioStore;

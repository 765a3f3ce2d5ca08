//! AI Speech - Text-to-Speech provider boundary
//!
//! Turns text plus prosody parameters into audio bytes by calling a remote
//! synthesis provider.
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the `TextToSpeech` trait (port)
//! - `providers` module contains concrete implementations (adapters)
//!
//! Voice selection is symbolic: callers pick a short configured name
//! (`"poem"`, `"horror"`, ...) and the [`VoiceCatalog`] maps it to the
//! provider's opaque reference id, falling back to the default voice for
//! names it does not know.
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{FishAudioProvider, SpeechConfig, SynthesisRequest, TextToSpeech};
//!
//! let provider = FishAudioProvider::new(SpeechConfig::default())?;
//! let audio = provider
//!     .synthesize(&SynthesisRequest::new("hello from the fridge"))
//!     .await?;
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;
pub mod voices;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::TextToSpeech;
pub use providers::fish_audio::FishAudioProvider;
pub use types::{KeyInfo, ProbeReport, SynthesisRequest};
pub use voices::VoiceCatalog;

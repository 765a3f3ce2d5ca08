//! Application services

mod critique_service;
mod speech_service;

pub use critique_service::CritiqueService;
pub use speech_service::SpeechService;

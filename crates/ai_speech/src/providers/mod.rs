//! Concrete synthesis provider adapters

pub mod fish_audio;

pub use fish_audio::FishAudioProvider;

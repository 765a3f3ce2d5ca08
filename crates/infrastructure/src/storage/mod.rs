//! Storage adapters

mod fs_audio_store;

pub use fs_audio_store::FsAudioStore;

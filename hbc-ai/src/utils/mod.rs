//! Utility modules for hbc-ai

pub mod audio_probe;

pub use audio_probe::{probe_audio, AudioInfo};

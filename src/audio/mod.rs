// src/audio/mod.rs
//! Audio module - frame acquisition and device playback.

pub mod player;
pub mod source;

// Re-export commonly used types
pub use player::Playback;
pub use source::{DecoderSource, FrameSource, StreamSpec};

// src/dsp/mod.rs
//! The audio-to-spectrum pipeline and its building blocks.

pub mod bars;
pub mod bins;
pub mod fft;
pub mod pipeline;
pub mod window;

// Re-export commonly used types
pub use fft::SpectralTransform;
pub use pipeline::{RenderSink, Series, SpectrumPipeline, TickOutcome, TickState};

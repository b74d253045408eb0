// src/ui/widgets/mod.rs
//! Chart widgets for the two render series.

pub mod spectrum;
pub mod waveform;

pub use spectrum::render_spectrum;
pub use waveform::render_waveform;

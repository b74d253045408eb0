// src/lib.rs
//! Wavescope - a terminal spectrum analyzer.
//!
//! Plays an audio file and renders its waveform plus a binned bar spectrum
//! in lockstep with playback.

pub mod app;
pub mod audio;
pub mod cli;
pub mod config;
pub mod dsp;
pub mod ui;

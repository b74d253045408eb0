// src/config/mod.rs
//! Analyzer tuning parameters.
//!
//! Every constant the pipeline depends on lives here as a named field so the
//! curves and sizes can be swapped without touching pipeline logic. Invalid
//! combinations are rejected up front; nothing is silently truncated.

use anyhow::{Result, ensure};

use crate::dsp::bins::{default_edges, validate_edges};

/// Configuration for the audio-to-spectrum pipeline.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// FFT length N. Must be a power of two.
    pub fft_size: usize,
    /// Samples per channel pulled from the source each tick.
    pub chunk_size: usize,
    /// EMA coefficient α ∈ (0, 1]. 1 disables smoothing entirely.
    pub smoothing: f32,
    /// Kaiser window shape parameter β. 0 gives a rectangular window.
    pub window_beta: f64,
    /// Aggregate bins into perceptual bands. When off, every raw bin is its
    /// own band and bars shrink to a uniform width.
    pub binning: bool,
    /// Band boundaries as indices into the N/2-length spectrum. Only used
    /// when `binning` is on.
    pub bin_edges: Vec<usize>,
    /// Apply the per-band gain compensation curve.
    pub gain_correction: bool,
    /// Guard added to the normalization denominator so a flat spectrum
    /// never divides by zero.
    pub epsilon: f32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        let fft_size = 1024;
        Self {
            fft_size,
            chunk_size: 2048,
            smoothing: 1.0,
            window_beta: 14.0,
            binning: true,
            bin_edges: default_edges(fft_size),
            gain_correction: true,
            epsilon: 1e-5,
        }
    }
}

impl AnalyzerConfig {
    /// Check everything that can be checked without knowing the stream
    /// layout. Per-stream constraints (chunk/channel divisibility) are
    /// enforced when the pipeline is built.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.fft_size.is_power_of_two(),
            "fft size must be a power of two, got {}",
            self.fft_size
        );
        ensure!(self.chunk_size > 0, "chunk size must be non-zero");
        ensure!(
            self.smoothing > 0.0 && self.smoothing <= 1.0,
            "smoothing coefficient must be in (0, 1], got {}",
            self.smoothing
        );
        ensure!(
            self.window_beta >= 0.0,
            "window beta must be non-negative, got {}",
            self.window_beta
        );
        ensure!(self.epsilon > 0.0, "epsilon must be positive");
        if self.binning {
            validate_edges(&self.bin_edges, self.fft_size)?;
        }
        Ok(())
    }

    /// Number of displayed bands under this configuration.
    pub fn band_count(&self) -> usize {
        if self.binning {
            self.bin_edges.len() - 1
        } else {
            self.fft_size / 2
        }
    }

    /// Horizontal inset on each side of a bar, in band units.
    ///
    /// Without binning there are N/2 hairline bars, so the gap scales down
    /// with the transform size instead of using the fixed band inset.
    pub fn bar_inset(&self) -> f64 {
        if self.binning {
            0.2
        } else {
            32.0 / self.fft_size as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        AnalyzerConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_bad_fft_size() {
        let config = AnalyzerConfig {
            fft_size: 1000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_smoothing() {
        for alpha in [0.0f32, -0.5, 1.5] {
            let config = AnalyzerConfig {
                smoothing: alpha,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "alpha {alpha}");
        }
    }

    #[test]
    fn rejects_bad_edge_table() {
        let config = AnalyzerConfig {
            bin_edges: vec![0, 9, 3, 512],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn band_count_follows_binning_mode() {
        let mut config = AnalyzerConfig::default();
        assert_eq!(config.band_count(), config.bin_edges.len() - 1);
        config.binning = false;
        assert_eq!(config.band_count(), config.fft_size / 2);
    }
}

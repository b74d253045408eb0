// src/cli.rs
//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::AnalyzerConfig;
use crate::dsp::bins::default_edges;

#[derive(Parser, Debug)]
#[command(
    name = "wavescope",
    about = "Plays an audio file while charting its waveform and bar spectrum in the terminal"
)]
pub struct Cli {
    /// Audio file to play (WAV, MP3, FLAC, OGG)
    pub input: PathBuf,

    /// FFT length (power of two)
    #[arg(long, default_value_t = 1024)]
    pub fft_size: usize,

    /// Samples per channel pulled from the file each tick
    #[arg(long, default_value_t = 2048)]
    pub chunk_size: usize,

    /// Smoothing coefficient in (0, 1]; 1 disables smoothing. Try 1/2, 1/4, 1/8...
    #[arg(long, default_value_t = 1.0)]
    pub smoothing: f32,

    /// Kaiser window shape parameter
    #[arg(long, default_value_t = 14.0)]
    pub beta: f64,

    /// Show every raw FFT bin instead of perceptual bands
    #[arg(long)]
    pub no_binning: bool,

    /// Disable the per-band gain compensation curve
    #[arg(long)]
    pub no_gain_correction: bool,
}

impl Cli {
    /// Translate the flags into a pipeline configuration.
    pub fn to_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            fft_size: self.fft_size,
            chunk_size: self.chunk_size,
            smoothing: self.smoothing,
            window_beta: self.beta,
            binning: !self.no_binning,
            bin_edges: default_edges(self.fft_size),
            gain_correction: !self.no_gain_correction,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_produce_a_valid_config() {
        let cli = Cli::parse_from(["wavescope", "song.wav"]);
        let config = cli.to_config();
        config.validate().unwrap();
        assert!(config.binning);
        assert_eq!(config.fft_size, 1024);
    }

    #[test]
    fn fft_size_override_rebuilds_edge_table() {
        let cli = Cli::parse_from(["wavescope", "song.wav", "--fft-size", "2048"]);
        let config = cli.to_config();
        assert_eq!(*config.bin_edges.last().unwrap(), 1024);
        config.validate().unwrap();
    }

    #[test]
    fn binning_and_gain_flags_invert() {
        let cli = Cli::parse_from([
            "wavescope",
            "song.wav",
            "--no-binning",
            "--no-gain-correction",
        ]);
        let config = cli.to_config();
        assert!(!config.binning);
        assert!(!config.gain_correction);
    }
}

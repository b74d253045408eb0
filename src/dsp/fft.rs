// src/dsp/fft.rs
//! Magnitude spectrum of a fixed-length real signal.

use std::sync::Arc;

use anyhow::{Result, ensure};
use rustfft::{Fft, FftPlanner, num_complex::Complex};

/// Forward FFT planned once for a fixed power-of-two size.
///
/// The input is real, so only the positive-frequency half of the spectrum
/// carries information; [`SpectralTransform::magnitudes`] returns exactly
/// `size / 2` values.
pub struct SpectralTransform {
    fft: Arc<dyn Fft<f32>>,
    size: usize,
}

impl SpectralTransform {
    /// Plan a transform of the given size. Fails if `size` is not a power
    /// of two.
    pub fn new(size: usize) -> Result<Self> {
        ensure!(
            size.is_power_of_two(),
            "fft size must be a power of two, got {size}"
        );

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        Ok(Self { fft, size })
    }

    /// Transform size N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Compute `|X[k]|` for the positive-frequency bins of an already
    /// windowed signal of exactly `size` samples.
    ///
    /// An all-zero input yields all-zero magnitudes; the log step downstream
    /// guards against that separately.
    pub fn magnitudes(&self, samples: &[f32]) -> Vec<f32> {
        debug_assert_eq!(samples.len(), self.size);

        let mut buffer: Vec<Complex<f32>> =
            samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
        buffer.resize(self.size, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);

        buffer[..self.size / 2].iter().map(|c| c.norm()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_power_of_two() {
        assert!(SpectralTransform::new(1000).is_err());
        assert!(SpectralTransform::new(1024).is_ok());
    }

    #[test]
    fn output_is_half_length_and_non_negative() {
        for n in [64usize, 256, 1024] {
            let fft = SpectralTransform::new(n).unwrap();
            let signal: Vec<f32> = (0..n).map(|i| (i as f32 * 0.1).sin()).collect();
            let mags = fft.magnitudes(&signal);
            assert_eq!(mags.len(), n / 2);
            assert!(mags.iter().all(|&m| m >= 0.0));
        }
    }

    #[test]
    fn silence_yields_zero_magnitudes() {
        let fft = SpectralTransform::new(512).unwrap();
        let mags = fft.magnitudes(&vec![0.0; 512]);
        assert!(mags.iter().all(|&m| m == 0.0));
    }

    #[test]
    fn impulse_yields_flat_spectrum() {
        let fft = SpectralTransform::new(256).unwrap();
        let mut signal = vec![0.0f32; 256];
        signal[0] = 1.0;
        let mags = fft.magnitudes(&signal);
        // A unit impulse has unit magnitude in every bin.
        assert!(mags.iter().all(|&m| (m - 1.0).abs() < 1e-5));
    }
}

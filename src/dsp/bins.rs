// src/dsp/bins.rs
//! Aggregation of raw FFT bins into perceptual frequency bands.

use anyhow::{Result, ensure};

/// Default band boundaries, tuned for a 1024-point transform at 44.1 kHz:
/// dense at the low end where hearing resolves pitch finely, one wide band
/// for everything above. The final edge is always `fft_size / 2`.
pub fn default_edges(fft_size: usize) -> Vec<usize> {
    let mut edges = vec![0, 1, 2, 4, 6, 9, 12, 16, 20, 24];
    edges.push(fft_size / 2);
    edges
}

/// Validate a band edge table against the transform size.
///
/// Edges must be strictly increasing and the last edge must not exceed
/// `fft_size / 2`. Anything else is a fatal configuration error; silently
/// truncating a band table would misrepresent the displayed spectrum.
pub fn validate_edges(edges: &[usize], fft_size: usize) -> Result<()> {
    ensure!(
        edges.len() >= 2,
        "bin edge table needs at least two edges, got {}",
        edges.len()
    );
    ensure!(
        edges.windows(2).all(|w| w[0] < w[1]),
        "bin edges must be strictly increasing: {edges:?}"
    );
    ensure!(
        *edges.last().unwrap() <= fft_size / 2,
        "last bin edge {} exceeds spectrum length {}",
        edges.last().unwrap(),
        fft_size / 2
    );
    Ok(())
}

/// Arithmetic mean of the magnitudes in `[lo, hi)` for each adjacent edge
/// pair. A degenerate range contributes 0 rather than NaN.
pub fn bin_means(magnitudes: &[f32], edges: &[usize]) -> Vec<f32> {
    edges
        .windows(2)
        .map(|pair| {
            let (lo, hi) = (pair[0], pair[1].min(magnitudes.len()));
            if lo >= hi {
                return 0.0;
            }
            let sum: f32 = magnitudes[lo..hi].iter().sum();
            sum / (hi - lo) as f32
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_valid() {
        for n in [64usize, 1024, 4096] {
            let edges = default_edges(n);
            validate_edges(&edges, n).unwrap();
        }
    }

    #[test]
    fn rejects_non_monotonic_edges() {
        assert!(validate_edges(&[0, 4, 4, 8], 1024).is_err());
        assert!(validate_edges(&[0, 8, 4], 1024).is_err());
        assert!(validate_edges(&[0], 1024).is_err());
    }

    #[test]
    fn rejects_out_of_range_edges() {
        assert!(validate_edges(&[0, 600], 1024).is_err());
        assert!(validate_edges(&[0, 512], 1024).is_ok());
    }

    #[test]
    fn constant_input_averages_to_constant() {
        let mags = vec![3.5f32; 512];
        let bands = bin_means(&mags, &[0, 2, 4, 512]);
        assert_eq!(bands.len(), 3);
        for &b in &bands {
            assert!((b - 3.5).abs() < 1e-6);
        }
    }

    #[test]
    fn degenerate_range_is_zero_not_nan() {
        // An edge past the end of the spectrum clamps to an empty range.
        let mags = vec![1.0f32; 4];
        let bands = bin_means(&mags, &[0, 4, 8]);
        assert_eq!(bands, vec![1.0, 0.0]);
        assert!(bands.iter().all(|b| b.is_finite()));
    }
}

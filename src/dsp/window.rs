// src/dsp/window.rs
//! Kaiser window coefficients for the analysis frame.

/// Compute an `len`-point Kaiser window with shape parameter `beta`.
///
/// The coefficients are computed once at startup and shared across every
/// tick. Higher `beta` trades main-lobe width for lower sidelobe leakage;
/// `beta = 0` degrades to a rectangular window. Any low-leakage taper would
/// do here, Kaiser is simply the configured choice.
pub fn kaiser(len: usize, beta: f64) -> Vec<f32> {
    if len <= 1 {
        return vec![1.0; len];
    }

    let denom = bessel_i0(beta);
    let half = (len - 1) as f64;

    (0..len)
        .map(|i| {
            // Map the index onto [-1, 1] across the window span.
            let r = 2.0 * i as f64 / half - 1.0;
            let arg = beta * (1.0 - r * r).max(0.0).sqrt();
            (bessel_i0(arg) / denom) as f32
        })
        .collect()
}

/// Zeroth-order modified Bessel function of the first kind.
///
/// Power series, summed until the next term no longer changes the result.
fn bessel_i0(x: f64) -> f64 {
    let half_x = x / 2.0;
    let mut sum = 1.0;
    let mut term = 1.0;
    let mut k = 1.0;

    loop {
        term *= (half_x / k) * (half_x / k);
        sum += term;
        if term < sum * 1e-12 {
            return sum;
        }
        k += 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_is_at_center() {
        let w = kaiser(1025, 14.0);
        assert!((w[512] - 1.0).abs() < 1e-6);
        for &v in &w {
            assert!(v > 0.0 && v <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn window_is_symmetric() {
        let w = kaiser(1024, 14.0);
        for i in 0..w.len() / 2 {
            let mirror = w[w.len() - 1 - i];
            assert!((w[i] - mirror).abs() < 1e-6, "index {i}");
        }
    }

    #[test]
    fn zero_beta_is_rectangular() {
        let w = kaiser(64, 0.0);
        assert!(w.iter().all(|&v| (v - 1.0).abs() < 1e-7));
    }

    #[test]
    fn degenerate_lengths() {
        assert!(kaiser(0, 14.0).is_empty());
        assert_eq!(kaiser(1, 14.0), vec![1.0]);
    }
}

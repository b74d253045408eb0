// src/dsp/bars.rs
//! Expansion of band values into a single bar-chart outline.

/// Trace the outline of a bar chart over `bands` as one continuous
/// polyline, returned as parallel x/y coordinate vectors.
///
/// Band `i` occupies the x-span `[i, i + 1]` with an `inset` gap on each
/// side and a flat top at its value. A leading `(0, 0)` and trailing
/// `(band_count, 0)` vertex close the path so the whole spectrum strokes
/// as one shape instead of `band_count` disconnected bars.
pub fn bar_outline(bands: &[f32], inset: f64) -> (Vec<f64>, Vec<f64>) {
    if bands.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let mut x = Vec::with_capacity(bands.len() * 4 + 2);
    let mut y = Vec::with_capacity(bands.len() * 4 + 2);

    x.push(0.0);
    y.push(0.0);

    for (i, &value) in bands.iter().enumerate() {
        let left = i as f64 + inset;
        let right = (i + 1) as f64 - inset;
        let top = f64::from(value);

        x.extend_from_slice(&[left, left, right, right]);
        y.extend_from_slice(&[0.0, top, top, 0.0]);
    }

    x.push(bands.len() as f64);
    y.push(0.0);

    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_empty_path() {
        let (x, y) = bar_outline(&[], 0.2);
        assert!(x.is_empty() && y.is_empty());
    }

    #[test]
    fn vertex_count_is_four_per_band_plus_endpoints() {
        let (x, y) = bar_outline(&[1.0, 2.0, 3.0], 0.2);
        assert_eq!(x.len(), 3 * 4 + 2);
        assert_eq!(y.len(), x.len());
    }

    #[test]
    fn x_is_non_decreasing_and_spans_band_count() {
        for count in [1usize, 5, 10, 64] {
            let bands: Vec<f32> = (0..count).map(|i| i as f32).collect();
            let (x, _) = bar_outline(&bands, 0.2);
            assert_eq!(x[0], 0.0);
            assert_eq!(*x.last().unwrap(), count as f64);
            assert!(x.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn bar_tops_match_band_values() {
        let (_, y) = bar_outline(&[4.0, 7.5], 0.2);
        // Outline: 0, [0 4 4 0], [0 7.5 7.5 0], 0
        assert_eq!(y[2], 4.0);
        assert_eq!(y[3], 4.0);
        assert_eq!(y[6], 7.5);
        assert_eq!(y[7], 7.5);
        assert_eq!(y[0], 0.0);
        assert_eq!(*y.last().unwrap(), 0.0);
    }
}

// src/dsp/pipeline.rs
//! Per-tick sequencing: frame in, waveform and spectrum series out.
//!
//! The pipeline is a pure, synchronous transform. The only state that
//! survives a tick is the exponentially smoothed band vector; everything
//! else is rebuilt from the incoming frame. Audio output, decoding and
//! drawing are collaborators behind narrow interfaces, so the whole thing
//! runs under test without a device or a terminal.

use anyhow::{Result, ensure};

use crate::config::AnalyzerConfig;

use super::bars::bar_outline;
use super::bins::bin_means;
use super::fft::SpectralTransform;
use super::window::kaiser;

/// Full-scale magnitude of a 16-bit sample.
pub const SAMPLE_MAX: f32 = i16::MAX as f32;

/// Display ceiling of the normalized spectrum.
pub const SPECTRUM_CEILING: f32 = 10.0;

/// Floor for the gain curve denominator; keeps `M == log10(x)` from
/// dividing by zero.
const GAIN_DENOM_FLOOR: f32 = 1e-6;

/// One renderable coordinate series, rebuilt fresh every tick and handed
/// to the sink by value.
#[derive(Debug, Clone, Default)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    /// Paired (x, y) points, in the shape chart widgets want.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Receiver for the two per-tick series. Implemented by the UI layer; the
/// pipeline never knows what drawing technology sits behind it.
pub trait RenderSink {
    fn set_waveform(&mut self, series: Series);
    fn set_spectrum(&mut self, series: Series);
}

/// Tick progression. `Processing` and `Emitted` are only observable from
/// within a tick; `Drained` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickState {
    AwaitingFrame,
    Processing,
    Emitted,
    Drained,
}

/// What a single tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Emitted,
    Drained,
}

/// The audio-to-spectrum pipeline.
///
/// Owns the precomputed window, the planned FFT and the smoothing state.
/// One instance per stream; independent instances never interfere.
pub struct SpectrumPipeline {
    channels: u16,
    expected_len: usize,
    decimation: usize,
    smoothing: f32,
    binning: bool,
    bin_edges: Vec<usize>,
    gain_correction: bool,
    epsilon: f32,
    bar_inset: f64,
    window: Vec<f32>,
    fft: SpectralTransform,
    smoothed: Vec<f32>,
    state: TickState,
}

impl SpectrumPipeline {
    /// Build a pipeline for a stream with the given interleaved channel
    /// count. Fails fast on any configuration the math cannot honor.
    pub fn new(config: &AnalyzerConfig, channels: u16) -> Result<Self> {
        config.validate()?;
        ensure!(channels > 0, "stream must have at least one channel");

        let expected_len = config.chunk_size * channels as usize;
        ensure!(
            expected_len % config.fft_size == 0 && expected_len >= config.fft_size,
            "chunk of {} interleaved samples cannot be decimated to fft size {}",
            expected_len,
            config.fft_size
        );

        Ok(Self {
            channels,
            expected_len,
            decimation: expected_len / config.fft_size,
            smoothing: config.smoothing,
            binning: config.binning,
            bin_edges: config.bin_edges.clone(),
            gain_correction: config.gain_correction,
            epsilon: config.epsilon,
            bar_inset: config.bar_inset(),
            window: kaiser(config.fft_size, config.window_beta),
            fft: SpectralTransform::new(config.fft_size)?,
            smoothed: vec![0.0; config.band_count()],
            state: TickState::AwaitingFrame,
        })
    }

    pub fn state(&self) -> TickState {
        self.state
    }

    pub fn band_count(&self) -> usize {
        self.smoothed.len()
    }

    /// Current smoothed band values (pre gain shaping).
    pub fn smoothed(&self) -> &[f32] {
        &self.smoothed
    }

    /// Run one tick over `frame`, pushing both series into `sink`.
    ///
    /// A frame of any length other than `chunk_size * channels` signals
    /// end-of-stream: the pipeline transitions to [`TickState::Drained`]
    /// and the frame is not transformed. Ticking after that is a contract
    /// violation by the driver and is ignored with a warning.
    pub fn tick(&mut self, frame: &[i16], sink: &mut dyn RenderSink) -> TickOutcome {
        if self.state == TickState::Drained {
            log::warn!("tick invoked after stream drain; ignoring");
            return TickOutcome::Drained;
        }
        if frame.len() != self.expected_len {
            log::info!(
                "short frame ({} of {} samples), draining pipeline",
                frame.len(),
                self.expected_len
            );
            self.state = TickState::Drained;
            return TickOutcome::Drained;
        }

        self.state = TickState::Processing;

        sink.set_waveform(self.build_waveform(frame));

        let windowed = self.decimate_and_window(frame);
        let magnitudes = self.fft.magnitudes(&windowed);
        let bands = if self.binning {
            bin_means(&magnitudes, &self.bin_edges)
        } else {
            magnitudes
        };

        let log_bands: Vec<f32> = bands.iter().map(|&v| log_magnitude(v)).collect();
        let norm = self.normalize(&log_bands, frame);
        ema(&mut self.smoothed, &norm, self.smoothing);

        let shaped = if self.gain_correction {
            shape_gain(&self.smoothed)
        } else {
            self.smoothed.clone()
        };

        let (x, y) = bar_outline(&shaped, self.bar_inset);
        sink.set_spectrum(Series { x, y });

        self.state = TickState::Emitted;
        TickOutcome::Emitted
    }

    /// Raw sample trace, x spaced so the full chunk spans `[0, 2 * chunk)`
    /// regardless of channel count.
    fn build_waveform(&self, frame: &[i16]) -> Series {
        let step = 2.0 / f64::from(self.channels);
        let x = (0..frame.len()).map(|i| i as f64 * step).collect();
        let y = frame.iter().map(|&s| f64::from(s)).collect();
        Series { x, y }
    }

    /// Reduce the chunk to N points by taking every k-th interleaved sample,
    /// then taper. This is a plain decimation, not an anti-aliased
    /// downsample: content above the decimated Nyquist folds back into the
    /// spectrum. Known aliasing risk, accepted for the display use case.
    fn decimate_and_window(&self, frame: &[i16]) -> Vec<f32> {
        frame
            .iter()
            .step_by(self.decimation)
            .zip(&self.window)
            .map(|(&s, &w)| f32::from(s) * w)
            .collect()
    }

    /// Range-normalize the log bands to `[0, SPECTRUM_CEILING]`, scaled by
    /// the loudness of the unwindowed frame so quiet passages shrink the
    /// whole graph instead of auto-leveling to full height.
    fn normalize(&self, log_bands: &[f32], frame: &[i16]) -> Vec<f32> {
        let min = log_bands.iter().copied().fold(f32::INFINITY, f32::min);
        let max = log_bands.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let scale = max - min + self.epsilon;

        let peak = frame
            .iter()
            .map(|&s| i32::from(s).unsigned_abs())
            .max()
            .unwrap_or(0);
        let peak_factor = peak as f32 / SAMPLE_MAX;

        log_bands
            .iter()
            .map(|&v| SPECTRUM_CEILING * peak_factor * (v - min) / scale)
            .collect()
    }
}

/// Log-magnitude compression. Zero maps to zero rather than negative
/// infinity; the clamp sits here, not in an after-the-fact sentinel scan.
fn log_magnitude(v: f32) -> f32 {
    if v == 0.0 { 0.0 } else { 20.0 * v.log10() }
}

/// First-order exponential moving average, applied independently per band.
pub(crate) fn ema(state: &mut [f32], input: &[f32], alpha: f32) {
    for (s, &n) in state.iter_mut().zip(input) {
        *s = alpha * n + (1.0 - alpha) * *s;
    }
}

/// Static per-band compensation curve: band x (1-based) is multiplied by
/// `M / (M - log10(x))` where M is the mean of the smoothed spectrum.
///
/// The curve is visually tuned against white/pink noise, not derived from
/// physics; it flattens an otherwise sagging high end. Results clamp to
/// zero so bar heights stay displayable.
fn shape_gain(smoothed: &[f32]) -> Vec<f32> {
    let m = smoothed.iter().sum::<f32>() / smoothed.len() as f32;
    smoothed
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let denom = m - ((i + 1) as f32).log10();
            let denom = if denom.abs() < GAIN_DENOM_FLOOR {
                GAIN_DENOM_FLOOR
            } else {
                denom
            };
            (v * m / denom).max(0.0)
        })
        .collect()
}

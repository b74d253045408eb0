// src/app/state.rs
//! Application state: glues source, playback and pipeline together.

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::{
    audio::{FrameSource, Playback},
    config::AnalyzerConfig,
    dsp::{RenderSink, Series, SpectrumPipeline},
    ui::{
        keybindings::{NavigationAction, key_to_action},
        layout::compute_layout,
        widgets::{render_spectrum, render_waveform},
    },
};

/// Most recent series emitted by the pipeline, kept only until the next
/// tick overwrites them.
#[derive(Default)]
struct LatestSeries {
    waveform: Series,
    spectrum: Series,
}

impl RenderSink for LatestSeries {
    fn set_waveform(&mut self, series: Series) {
        self.waveform = series;
    }

    fn set_spectrum(&mut self, series: Series) {
        self.spectrum = series;
    }
}

/// Main application state.
pub struct App {
    config: AnalyzerConfig,
    source: Box<dyn FrameSource>,
    playback: Playback,
    pipeline: SpectrumPipeline,
    series: LatestSeries,
    expected_len: usize,
    paused: bool,
    drained: bool,
}

impl App {
    /// Wire the collaborators together. The pipeline is built against the
    /// stream layout the source reported at open time.
    pub fn new(
        source: Box<dyn FrameSource>,
        playback: Playback,
        config: AnalyzerConfig,
    ) -> Result<Self> {
        let spec = source.spec();
        let pipeline = SpectrumPipeline::new(&config, spec.channels)?;
        let expected_len = config.chunk_size * spec.channels as usize;

        Ok(Self {
            config,
            source,
            playback,
            pipeline,
            series: LatestSeries::default(),
            expected_len,
            paused: false,
            drained: false,
        })
    }

    /// Handle a key event and return true if the app should quit.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        match key_to_action(&key) {
            NavigationAction::TogglePause => {
                if self.paused {
                    self.playback.resume();
                } else {
                    self.playback.pause();
                }
                self.paused = !self.paused;
                false
            }
            NavigationAction::Quit => {
                self.playback.stop();
                true
            }
            NavigationAction::None => false,
        }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn drained(&self) -> bool {
        self.drained
    }

    /// Run one playback tick: pull a frame, queue it for output, transform
    /// it, store the series. Returns true once the stream has drained and
    /// the final write has been flushed.
    ///
    /// The output write and the transform happen in the same tick over the
    /// same samples, so what is heard and what is drawn stay in lockstep.
    /// The write call blocks until the device is ready for another chunk,
    /// which is what paces this loop.
    pub fn advance(&mut self) -> Result<bool> {
        if self.drained {
            return Ok(true);
        }
        if self.paused {
            return Ok(false);
        }

        let frame = self.source.next_frame(self.config.chunk_size);
        if frame.len() == self.expected_len {
            self.playback.write(frame.clone())?;
            self.pipeline.tick(&frame, &mut self.series);
            Ok(false)
        } else {
            // Short frame: end-of-stream. Flush whatever remains and let
            // the device drain before reporting completion.
            self.pipeline.tick(&frame, &mut self.series);
            if !frame.is_empty() {
                self.playback.write(frame)?;
            }
            self.playback.finish()?;
            log::info!("stream drained; playback flushed");
            self.drained = true;
            Ok(true)
        }
    }

    /// Draw both chart panes from the most recent series.
    pub fn draw(&self, f: &mut Frame<'_>) {
        let layout = compute_layout(f.area());
        render_waveform(
            f,
            layout.waveform,
            &self.series.waveform,
            self.config.chunk_size,
        );
        render_spectrum(
            f,
            layout.spectrum,
            &self.series.spectrum,
            self.pipeline.band_count(),
        );
    }
}

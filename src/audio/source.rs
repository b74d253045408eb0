// src/audio/source.rs
//! Frame acquisition from a decoded audio stream.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use rodio::{Decoder, Source};

/// Stream layout, reported once at open time.
#[derive(Debug, Clone, Copy)]
pub struct StreamSpec {
    pub sample_rate: u32,
    pub channels: u16,
    /// Bytes per decoded sample. Always 2 here: frames carry `i16`.
    pub sample_width: u16,
}

/// Supplier of fixed-size chunks of interleaved 16-bit PCM.
///
/// A frame shorter than `chunk_size * channels` (possibly empty) signals
/// end-of-stream; the caller must not request further frames after that.
pub trait FrameSource {
    fn spec(&self) -> StreamSpec;
    fn next_frame(&mut self, chunk_size: usize) -> Vec<i16>;
}

/// [`FrameSource`] over rodio's container decoder. Container parsing is
/// entirely the decoder's business; this type only slices the sample
/// stream into chunks.
pub struct DecoderSource {
    decoder: Decoder<BufReader<File>>,
    spec: StreamSpec,
}

impl DecoderSource {
    /// Open an audio file and read its stream parameters.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("opening audio file {}", path.display()))?;
        let decoder = Decoder::new(BufReader::new(file))
            .with_context(|| format!("decoding {}", path.display()))?;

        let spec = StreamSpec {
            sample_rate: decoder.sample_rate(),
            channels: decoder.channels(),
            sample_width: 2,
        };
        Ok(Self { decoder, spec })
    }
}

impl FrameSource for DecoderSource {
    fn spec(&self) -> StreamSpec {
        self.spec
    }

    fn next_frame(&mut self, chunk_size: usize) -> Vec<i16> {
        let wanted = chunk_size * self.spec.channels as usize;
        (&mut self.decoder).take(wanted).collect()
    }
}

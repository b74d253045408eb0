// src/audio/player.rs
//! PCM playback on a dedicated audio thread.
//!
//! The tick loop hands each frame over through a one-slot mailbox
//! (`sync_channel(1)`), and the audio thread refuses the next frame until
//! its sink queue has drained to a single buffered chunk. Together those
//! two things pace the whole application to playback rate with at most one
//! frame in flight, without the tick loop ever touching the device.

use std::sync::mpsc::{self, Sender, SyncSender};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};

use super::source::StreamSpec;

/// How often the audio thread re-checks its sink queue while pacing.
const DRAIN_POLL: Duration = Duration::from_millis(2);

/// Commands sent to the audio playback thread.
enum PlayerCommand {
    Write(Vec<i16>),
    Pause,
    Resume,
    Stop,
    Finish(Sender<()>),
}

/// Owner of the output device lifecycle. Opened once, released exactly
/// once when the command channel closes (or on [`Playback::stop`]).
pub struct Playback {
    cmd_tx: SyncSender<PlayerCommand>,
}

impl Playback {
    /// Open the default output device for the given stream layout.
    ///
    /// The device itself lives on the spawned thread; failure to open it is
    /// reported back synchronously and is fatal to the caller.
    pub fn open(spec: StreamSpec) -> Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::sync_channel::<PlayerCommand>(1);
        let (ready_tx, ready_rx) = mpsc::channel::<std::result::Result<(), String>>();

        thread::spawn(move || {
            let (stream, handle) = match OutputStream::try_default() {
                Ok(pair) => pair,
                Err(e) => {
                    let _ = ready_tx.send(Err(format!("opening default audio output: {e}")));
                    return;
                }
            };
            let sink = match Sink::try_new(&handle) {
                Ok(sink) => sink,
                Err(e) => {
                    let _ = ready_tx.send(Err(format!("creating playback sink: {e}")));
                    return;
                }
            };
            let _ = ready_tx.send(Ok(()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    PlayerCommand::Write(frame) => {
                        sink.append(SamplesBuffer::new(spec.channels, spec.sample_rate, frame));
                        // Hold off the next write until at most one chunk is
                        // queued behind the playing one. Skipped while paused,
                        // otherwise a pre-pause write would spin forever.
                        while sink.len() > 1 && !sink.is_paused() {
                            thread::sleep(DRAIN_POLL);
                        }
                    }
                    PlayerCommand::Pause => sink.pause(),
                    PlayerCommand::Resume => sink.play(),
                    PlayerCommand::Stop => sink.stop(),
                    PlayerCommand::Finish(ack) => {
                        sink.sleep_until_end();
                        let _ = ack.send(());
                    }
                }
            }
            sink.stop();
            // Keep the stream alive until the thread exits.
            drop(stream);
        });

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self { cmd_tx }),
            Ok(Err(msg)) => Err(anyhow!(msg)),
            Err(_) => Err(anyhow!("audio output thread exited before reporting readiness")),
        }
    }

    /// Queue one frame for output. Blocks while the previous frame is
    /// still in flight; this is the tick loop's pacing point.
    pub fn write(&self, frame: Vec<i16>) -> Result<()> {
        self.cmd_tx
            .send(PlayerCommand::Write(frame))
            .map_err(|_| anyhow!("audio output thread terminated"))
    }

    /// Pause output without releasing the device.
    pub fn pause(&self) {
        let _ = self.cmd_tx.send(PlayerCommand::Pause);
    }

    /// Resume paused output.
    pub fn resume(&self) {
        let _ = self.cmd_tx.send(PlayerCommand::Resume);
    }

    /// Immediately discard anything still queued.
    pub fn stop(&self) {
        let _ = self.cmd_tx.send(PlayerCommand::Stop);
    }

    /// Block until everything queued has been played out. Used for the
    /// final flush once the source is exhausted.
    pub fn finish(&self) -> Result<()> {
        let (ack_tx, ack_rx) = mpsc::channel();
        self.cmd_tx
            .send(PlayerCommand::Finish(ack_tx))
            .map_err(|_| anyhow!("audio output thread terminated"))?;
        ack_rx
            .recv()
            .map_err(|_| anyhow!("audio output thread terminated"))
    }
}

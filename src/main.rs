use anyhow::Result;
use clap::Parser;

use wavescope::{
    app::App,
    audio::{DecoderSource, FrameSource, Playback},
    cli::Cli,
    ui,
};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.to_config();
    config.validate()?;

    let source = DecoderSource::open(&cli.input)?;
    let spec = source.spec();
    log::info!(
        "playing {} ({} Hz, {} channel(s))",
        cli.input.display(),
        spec.sample_rate,
        spec.channels
    );

    let playback = Playback::open(spec)?;
    let app = App::new(Box::new(source), playback, config)?;
    ui::run(app)
}

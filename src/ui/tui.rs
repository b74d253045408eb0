// src/ui/tui.rs
//! Terminal lifecycle and the tick-driven run loop.

use std::{io, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;

/// Run the application until the stream drains or the user quits,
/// restoring the terminal on the way out.
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| app.draw(f))?;

        // Playback write back-pressure paces the ticks, so input polling
        // only needs a token timeout; while paused there is nothing to
        // pace and a longer poll keeps the loop idle.
        let timeout = if app.paused() {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(1)
        };

        if event::poll(timeout)? {
            if let CEvent::Key(key) = event::read()? {
                if app.on_key(key) {
                    return Ok(());
                }
            }
        }

        if app.advance()? {
            return Ok(());
        }
    }
}

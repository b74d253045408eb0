// src/ui/layout.rs
//! Layout computation for the two chart panes.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed layout areas for rendering.
pub struct ComputedLayout {
    /// Upper pane: waveform trace
    pub waveform: Rect,
    /// Lower pane: spectrum bars
    pub spectrum: Rect,
}

/// Split the terminal into the waveform row and the spectrum row.
pub fn compute_layout(area: Rect) -> ComputedLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    ComputedLayout {
        waveform: rows[0],
        spectrum: rows[1],
    }
}

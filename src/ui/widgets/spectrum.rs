// src/ui/widgets/spectrum.rs
//! Bar-spectrum outline widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use crate::dsp::Series;
use crate::dsp::pipeline::SPECTRUM_CEILING;

/// Render the spectrum bar outline as a single continuous path.
pub fn render_spectrum(f: &mut Frame<'_>, area: Rect, series: &Series, band_count: usize) {
    let points = series.points();
    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Magenta))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(Block::default().borders(Borders::ALL).title("2: Spectrum"))
        .x_axis(
            Axis::default()
                .bounds([0.0, band_count as f64])
                .labels(["0".to_string(), band_count.to_string()]),
        )
        .y_axis(Axis::default().bounds([0.0, f64::from(SPECTRUM_CEILING)]));

    f.render_widget(chart, area);
}

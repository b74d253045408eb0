// src/ui/widgets/waveform.rs
//! Raw sample trace widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use crate::dsp::Series;

/// Render the waveform polyline. Axis ranges are fixed to full scale so
/// the trace amplitude tracks the actual sample values.
pub fn render_waveform(f: &mut Frame<'_>, area: Rect, series: &Series, chunk_size: usize) {
    let points = series.points();
    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let span = 2.0 * chunk_size as f64;
    let chart = Chart::new(vec![dataset])
        .block(Block::default().borders(Borders::ALL).title("1: Waveform"))
        .x_axis(Axis::default().bounds([0.0, span]).labels([
            "0".to_string(),
            chunk_size.to_string(),
            (2 * chunk_size).to_string(),
        ]))
        .y_axis(Axis::default().bounds([-f64::from(i16::MAX), f64::from(i16::MAX)]));

    f.render_widget(chart, area);
}

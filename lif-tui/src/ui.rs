// TUI rendering: voltage trace chart (time on X, potential on Y) + status panel.

use std::io::Stdout;

use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Terminal,
};

use crate::app::App;

/// Draws the UI each frame:
/// - Top: the visible slice of the trace with the threshold as a flat line.
/// - Bottom: window position, spikes in view, controls.
pub fn draw(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &App) -> anyhow::Result<()> {
    let points = app.points();
    let [x0, x1] = app.x_bounds();
    let [y0, y1] = app.y_bounds();
    let threshold_line = [(x0, app.threshold), (x1, app.threshold)];

    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Percentage(85), Constraint::Percentage(15)].as_ref())
            .split(f.size());

        let datasets = vec![
            Dataset::default()
                .name("V")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan))
                .data(&points),
            Dataset::default()
                .name("V_th")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Red))
                .data(&threshold_line),
        ];

        let chart = Chart::new(datasets)
            .block(Block::default().title("Membrane potential  (time →)").borders(Borders::ALL))
            .x_axis(
                Axis::default()
                    .title("t (ms)")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([x0, x1])
                    .labels(vec![
                        Span::raw(format!("{:.0}", x0)),
                        Span::raw(format!("{:.0}", (x0 + x1) / 2.0)),
                        Span::raw(format!("{:.0}", x1)),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .title("V")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([y0, y1])
                    .labels(vec![
                        Span::raw(format!("{:.1}", y0)),
                        Span::raw(format!("{:.1}", (y0 + y1) / 2.0)),
                        Span::raw(format!("{:.1}", y1)),
                    ]),
            );
        f.render_widget(chart, chunks[0]);

        let status = format!(
            "Steps: {}-{} of {} | Spikes in view: {} | Controls: [←/→] Pan  [+/-] Zoom  [Home/End] Jump  [q] Quit",
            x0,
            x1,
            app.trace.len(),
            app.spikes_in_view()
        );
        let status_widget = Paragraph::new(status)
            .style(Style::default().fg(Color::Cyan))
            .block(Block::default().title("Status").borders(Borders::ALL));
        f.render_widget(status_widget, chunks[1]);
    })?;
    Ok(())
}

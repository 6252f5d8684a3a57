//! Figure widget - relative performance lines for every fund
//!
//! Displays:
//! - One braille line per fund, colored from the theme's series cycle
//! - Legend with the fund's final percent change
//! - Date labels (first / middle / last row) and percent labels

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph, Widget},
};

use crate::figure::ChartFigure;
use crate::theme::Theme;

pub struct FigureChart<'a> {
    figure: &'a ChartFigure,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> FigureChart<'a> {
    pub fn new(figure: &'a ChartFigure, theme: &'a Theme) -> Self {
        Self {
            figure,
            theme,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn block(&self) -> Block<'a> {
        let border = if self.focused {
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.muted)
        };
        Block::default()
            .title(format!(" {} ", self.figure.title))
            .borders(Borders::ALL)
            .border_style(border)
            .style(Style::default().bg(self.theme.background))
    }
}

/// Axis bounds with 5% headroom; a flat series gets ±1 point.
fn padded_bounds(lo: f64, hi: f64) -> [f64; 2] {
    let range = hi - lo;
    let pad = if range > 0.0 { range * 0.05 } else { 1.0 };
    [lo - pad, hi + pad]
}

impl<'a> Widget for FigureChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some((lo, hi)) = self.figure.value_bounds() else {
            Paragraph::new("No price data in this window")
                .style(Style::default().fg(self.theme.text_secondary))
                .block(self.block())
                .render(area, buf);
            return;
        };

        // Datasets borrow their points, so build them all up front.
        let points: Vec<Vec<(f64, f64)>> =
            self.figure.series.iter().map(|s| s.points()).collect();
        let names: Vec<String> = self
            .figure
            .series
            .iter()
            .map(|s| match s.last_value() {
                Some(v) => format!("{} {v:+.2}%", s.label),
                None => format!("{} n/a", s.label),
            })
            .collect();

        let datasets: Vec<Dataset> = points
            .iter()
            .zip(names)
            .enumerate()
            .map(|(i, (data, name))| {
                Dataset::default()
                    .name(name)
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(self.theme.series_color(i)))
                    .data(data)
            })
            .collect();

        let x_max = self.figure.dates.len().saturating_sub(1).max(1) as f64;
        let x_labels: Vec<Span> = match (self.figure.dates.first(), self.figure.dates.last()) {
            (Some(first), Some(last)) => {
                let mid = self.figure.dates[self.figure.dates.len() / 2];
                vec![
                    Span::raw(first.to_string()),
                    Span::raw(mid.to_string()),
                    Span::raw(last.to_string()),
                ]
            }
            _ => vec![],
        };

        let [y_lower, y_upper] = padded_bounds(lo, hi);
        let y_labels = vec![
            Span::raw(format!("{y_lower:.1}%")),
            Span::raw(format!("{:.1}%", (y_lower + y_upper) / 2.0)),
            Span::raw(format!("{y_upper:.1}%")),
        ];

        let chart = Chart::new(datasets)
            .block(self.block())
            .legend_position(Some(LegendPosition::TopLeft))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 1)))
            .x_axis(
                Axis::default()
                    .title(Span::styled(
                        "Date",
                        Style::default().fg(self.theme.text_secondary),
                    ))
                    .style(Style::default().fg(self.theme.muted))
                    .bounds([0.0, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled(
                        "% change",
                        Style::default().fg(self.theme.text_secondary),
                    ))
                    .style(Style::default().fg(self.theme.muted))
                    .bounds([y_lower, y_upper])
                    .labels(y_labels),
            );

        chart.render(area, buf);
    }
}

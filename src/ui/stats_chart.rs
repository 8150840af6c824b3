use crate::app::state::AppState;
use crate::tracker::WeeklySeries;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let series = state.tracker.series();
    let points = chart_points(series);
    let y_max = y_axis_max(series);

    let datasets = vec![
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Theme::chart_line())
            .data(&points),
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Theme::count())
            .data(&points),
    ];

    let x_labels: Vec<Span> = series
        .iter()
        .map(|d| Span::styled(d.label.clone(), Theme::axis()))
        .collect();
    let y_labels: Vec<Span> = y_axis_labels(y_max)
        .into_iter()
        .map(|l| Span::styled(l, Theme::axis()))
        .collect();

    let block = Block::default()
        .title(" 📅 Weekly Overview ")
        .title_alignment(Alignment::Center)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border());

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Theme::axis())
                .bounds([0.0, (series.len() - 1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("cups")
                .style(Theme::axis())
                .bounds([0.0, f64::from(y_max)])
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}

/// One point per day: x = day index (oldest 0), y = cups.
pub(crate) fn chart_points(series: &WeeklySeries) -> Vec<(f64, f64)> {
    series
        .iter()
        .enumerate()
        .map(|(i, d)| (i as f64, f64::from(d.count)))
        .collect()
}

/// Top of the y-axis: at least 1, and even so the midpoint label is whole.
pub(crate) fn y_axis_max(series: &WeeklySeries) -> u32 {
    let max = series.max_count().max(1);
    if max > 1 && max % 2 == 1 {
        max.saturating_add(1)
    } else {
        max
    }
}

pub(crate) fn y_axis_labels(y_max: u32) -> Vec<String> {
    if y_max < 2 {
        vec!["0".to_string(), y_max.to_string()]
    } else {
        vec!["0".to_string(), (y_max / 2).to_string(), y_max.to_string()]
    }
}

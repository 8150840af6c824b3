mod counter_panel;
pub mod layout;
mod stats_chart;
mod stats_toggle;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.show_stats);

    counter_panel::render(frame, &app_layout, state);
    stats_toggle::render(frame, app_layout.toggle, state);
    if let Some(chart_area) = app_layout.chart.filter(|a| !a.is_empty()) {
        stats_chart::render(frame, chart_area, state);
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::test_state;
    use crate::app::state::Control;
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|l| l.contains(needle))
    }

    #[test]
    fn test_counter_panel_renders_count() {
        let mut state = test_state();
        state.press(Control::Increment);
        state.press(Control::Increment);
        let lines = draw(&state, 60, 30);
        assert!(contains(&lines, "Today's Coffee Count"));
        assert!(contains(&lines, " 2 "));
        assert!(contains(&lines, "Show Stats"));
        assert!(!contains(&lines, "Weekly Overview"));
    }

    #[test]
    fn test_chart_appears_when_toggled() {
        let mut state = test_state();
        state.toggle_stats();
        let lines = draw(&state, 60, 30);
        assert!(contains(&lines, "Hide Stats"));
        assert!(contains(&lines, "Weekly Overview"));

        state.toggle_stats();
        let lines = draw(&state, 60, 30);
        assert!(!contains(&lines, "Weekly Overview"));
    }

    #[test]
    fn test_status_bar_shows_focus() {
        let mut state = test_state();
        state.focus_next();
        let lines = draw(&state, 80, 20);
        assert!(lines[19].contains("[STATS]"));
        assert!(lines[19].contains("q quit"));
    }

    #[test]
    fn test_render_is_total_on_small_terminals() {
        let mut state = test_state();
        state.toggle_stats();
        for (w, h) in [(1, 1), (10, 4), (30, 8), (200, 60)] {
            draw(&state, w, h);
        }
    }
}

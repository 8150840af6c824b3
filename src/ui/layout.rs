use crate::app::state::Control;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Width of the centered column holding the panels.
const COLUMN_WIDTH: u16 = 48;
const TOGGLE_WIDTH: u16 = 20;
const BUTTON_WIDTH: u16 = 7;

pub struct AppLayout {
    pub counter_panel: Rect,
    pub decrement: Rect,
    pub count: Rect,
    pub increment: Rect,
    pub toggle: Rect,
    pub chart: Option<Rect>,
    pub status_bar: Rect,
}

impl AppLayout {
    /// The control under a terminal cell, if any.
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let pos = Position::new(column, row);
        [
            (self.decrement, Control::Decrement),
            (self.increment, Control::Increment),
            (self.toggle, Control::ToggleStats),
        ]
        .into_iter()
        .find(|(rect, _)| rect.contains(pos))
        .map(|(_, control)| control)
    }
}

pub fn compute_layout(area: Rect, show_stats: bool) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Panels
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = centered(main_chunks[0], COLUMN_WIDTH);
    let status_bar = main_chunks[1];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Counter panel
            Constraint::Length(1),
            Constraint::Length(3), // Stats toggle
            Constraint::Length(1),
            Constraint::Min(0), // Chart
        ])
        .split(content);

    let counter_panel = rows[0];

    // Inside the panel border: [ - ] count [ + ]
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(3),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .split(counter_panel);

    AppLayout {
        counter_panel,
        decrement: buttons[0],
        count: buttons[1],
        increment: buttons[2],
        toggle: centered(rows[2], TOGGLE_WIDTH),
        chart: show_stats.then_some(rows[4]),
        status_bar,
    }
}

fn centered(area: Rect, width: u16) -> Rect {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Fill(1),
        ])
        .split(area);
    cols[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_only_when_shown() {
        let area = Rect::new(0, 0, 60, 30);
        assert!(compute_layout(area, false).chart.is_none());
        let chart = compute_layout(area, true).chart.unwrap();
        assert!(chart.height > 0);
        assert_eq!(chart.width, COLUMN_WIDTH);
    }

    #[test]
    fn test_controls_do_not_overlap() {
        let layout = compute_layout(Rect::new(0, 0, 60, 30), true);
        assert!(!layout.decrement.intersects(layout.increment));
        assert!(!layout.decrement.intersects(layout.toggle));
        assert!(!layout.increment.intersects(layout.toggle));
        assert_eq!(layout.decrement.height, 3);
        assert_eq!(layout.status_bar.y, 29);
    }

    #[test]
    fn test_control_at() {
        let layout = compute_layout(Rect::new(0, 0, 60, 30), false);
        let inc = layout.increment;
        assert_eq!(layout.control_at(inc.x, inc.y), Some(Control::Increment));
        let dec = layout.decrement;
        assert_eq!(
            layout.control_at(dec.right() - 1, dec.bottom() - 1),
            Some(Control::Decrement)
        );
        assert_eq!(layout.control_at(layout.count.x + 1, layout.count.y), None);
        assert_eq!(layout.control_at(0, 29), None);
    }

    #[test]
    fn test_tiny_terminal() {
        let layout = compute_layout(Rect::new(0, 0, 4, 2), true);
        assert!(layout.counter_panel.width <= 4);
        assert_eq!(layout.control_at(100, 100), None);
    }
}

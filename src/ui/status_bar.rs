use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const HELP: &str = " +/- cups │ s stats │ Tab focus │ Enter press │ q quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focus_name = state.focus.name();

    let mut parts: Vec<Span> = vec![Span::styled(HELP, Theme::status_bar())];

    // Pad to fill remaining space
    let used = HELP.chars().count();
    let remaining = (area.width as usize).saturating_sub(used + indicator_width(focus_name));
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Theme::ACCENT).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

/// Columns taken by the `" [NAME] "` indicator.
fn indicator_width(focus_name: &str) -> usize {
    focus_name.len() + 4
}

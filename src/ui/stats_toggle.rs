use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Control::ToggleStats;
    let style = if focused {
        Theme::toggle_focused()
    } else {
        Theme::toggle()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let line = Line::from(vec![
        Span::styled(format!(" {} ", state.toggle_label()), style),
        Span::styled("▁▅▃ ", style),
    ]);
    let button = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(button, area);
}

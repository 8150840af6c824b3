use crate::app::state::*;
use crate::ui::layout::AppLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render(frame: &mut Frame, layout: &AppLayout, state: &AppState) {
    let block = Block::default()
        .title(" ☕ Today's Coffee Count ")
        .title_alignment(Alignment::Center)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border());
    frame.render_widget(block, layout.counter_panel);

    render_button(frame, layout.decrement, state, Control::Decrement, "−");

    // Count sits on the middle row of the button strip
    let count_row = Rect {
        y: layout.count.y + layout.count.height / 2,
        height: layout.count.height.min(1),
        ..layout.count
    };
    let count = Paragraph::new(Span::styled(
        state.tracker.today_count().to_string(),
        Theme::count(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(count, count_row);

    render_button(frame, layout.increment, state, Control::Increment, "+");
}

fn render_button(frame: &mut Frame, area: Rect, state: &AppState, control: Control, glyph: &str) {
    let enabled = state.is_enabled(control);
    let focused = state.focus == control;
    let style = button_style(enabled, focused);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(if focused && enabled {
            Theme::border_focused()
        } else {
            style
        });

    let button = Paragraph::new(Span::styled(glyph, style))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(button, area);
}

pub(crate) fn button_style(enabled: bool, focused: bool) -> Style {
    match (enabled, focused) {
        (false, _) => Theme::button_disabled(),
        (true, true) => Theme::button_focused(),
        (true, false) => Theme::button(),
    }
}

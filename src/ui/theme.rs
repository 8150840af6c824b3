use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Rgb(59, 130, 246);
    pub const ACCENT_DARK: Color = Color::Rgb(37, 99, 235);
    pub const TEXT_MUTED: Color = Color::DarkGray;

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn count() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn button_focused() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn button_disabled() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::DIM)
    }

    pub fn toggle() -> Style {
        Style::default().fg(Color::White).bg(Self::ACCENT)
    }

    pub fn toggle_focused() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::ACCENT_DARK)
            .add_modifier(Modifier::BOLD)
    }

    pub fn chart_line() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn axis() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}

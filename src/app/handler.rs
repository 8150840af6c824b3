use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::ui::layout::compute_layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use tracing::{debug, warn};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::InputClosed { reason } => {
            warn!("Terminal input closed: {}", reason);
            vec![Action::Quit]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => {
            handle_mouse(state, mouse);
            vec![]
        }
        CEvent::Resize(width, height) => {
            state.set_viewport(width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Windows reports releases too; act on presses only
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('k') | KeyCode::Up => {
            state.press(Control::Increment);
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Char('j') | KeyCode::Down => {
            state.press(Control::Decrement);
        }
        KeyCode::Char('s') => state.toggle_stats(),
        KeyCode::Tab | KeyCode::Right => state.focus_next(),
        KeyCode::BackTab | KeyCode::Left => state.focus_prev(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.press(state.focus);
        }
        _ => {}
    }
    vec![]
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let layout = compute_layout(state.viewport, state.show_stats);
    if let Some(control) = layout.control_at(mouse.column, mouse.row) {
        debug!(control = control.name(), "clicked");
        state.focus = control;
        state.dirty = true;
        state.press(control);
    }
}

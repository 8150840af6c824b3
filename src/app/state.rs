use crate::tracker::Tracker;
use ratatui::layout::Rect;
use tracing::debug;

/// The on-screen controls, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Decrement,
    Increment,
    ToggleStats,
}

impl Control {
    pub fn next(self) -> Self {
        match self {
            Control::Decrement => Control::Increment,
            Control::Increment => Control::ToggleStats,
            Control::ToggleStats => Control::Decrement,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Control::Decrement => Control::ToggleStats,
            Control::Increment => Control::Decrement,
            Control::ToggleStats => Control::Increment,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Control::Decrement => "DECREMENT",
            Control::Increment => "INCREMENT",
            Control::ToggleStats => "STATS",
        }
    }
}

pub struct AppState {
    pub tracker: Tracker,
    pub show_stats: bool,
    pub focus: Control,
    /// Last known terminal size, used for mouse hit testing.
    pub viewport: Rect,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(tracker: Tracker, show_stats: bool) -> Self {
        Self {
            tracker,
            show_stats,
            focus: Control::Increment,
            viewport: Rect::default(),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::Decrement => self.tracker.can_decrement(),
            Control::Increment | Control::ToggleStats => true,
        }
    }

    /// Apply a control. Returns false if the control was disabled.
    pub fn press(&mut self, control: Control) -> bool {
        if !self.is_enabled(control) {
            debug!(control = control.name(), "pressed while disabled");
            return false;
        }
        match control {
            Control::Decrement => {
                self.tracker.decrement();
            }
            Control::Increment => {
                self.tracker.increment();
            }
            Control::ToggleStats => self.toggle_stats(),
        }
        self.dirty = true;
        true
    }

    pub fn toggle_stats(&mut self) {
        self.show_stats = !self.show_stats;
        debug!(show_stats = self.show_stats, "stats toggled");
        self.dirty = true;
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.show_stats {
            "Hide Stats"
        } else {
            "Show Stats"
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.dirty = true;
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.dirty = true;
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
        self.dirty = true;
    }
}

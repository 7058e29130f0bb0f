use crate::core::catalog::Msg;

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw terminal input (keyboard/mouse).
    Input(crossterm::event::Event),
    /// Catalog transition, usually the outcome of a spawned fetch.
    Catalog(Msg),
}

/// High-level actions resolved from key bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ShowHelp,
    CloseHelp,
    FocusSearch,
    FocusFilters,
    ToggleFilters,
    Reload,
    ClearSearch,
    /// Acknowledge the detail error, or collapse the type panel.
    Dismiss,
}

/// Which region receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Grid,
    Search,
    Filters,
}

impl Focus {
    pub fn label(self) -> &'static str {
        match self {
            Focus::Grid => "Grid",
            Focus::Search => "Search",
            Focus::Filters => "Filters",
        }
    }
}

/// Notification level for the overlay system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A timed notification shown in the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks remaining before auto-dismiss.
    pub ttl_ticks: u32,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            ttl_ticks: 60,
        }
    }
}

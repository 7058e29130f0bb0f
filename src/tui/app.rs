use std::cell::Cell;
use std::io;
use std::time::Duration;

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent, Focus, Notification, NotificationLevel};
use super::layout::AppLayout;
use super::services::Services;
use super::theme;
use super::views::detail;
use super::views::filter_bar::{self, TagInput, TagPanelState};
use super::views::grid::{GridInput, GridState};
use super::widgets::input_buffer::{EditOutcome, InputBuffer};
use crate::core::catalog::{CollectionStatus, Msg, TagResolution, ViewState};

/// Maximum notifications shown at once.
const MAX_NOTIFICATIONS: usize = 3;

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Region receiving keyboard input.
    pub focus: Focus,
    /// Catalog state; only changed through [`AppState::dispatch`].
    view: ViewState,
    search: InputBuffer,
    grid: GridState,
    tags: TagPanelState,
    /// Whether the type-tag panel is expanded.
    pub filters_open: bool,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Tick counter for spinners.
    tick: u64,
    /// Terminal area of the last frame, for mouse hit-testing.
    last_area: Cell<Rect>,
    /// Receiver for backend events.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Backend services handle.
    services: Services,
}

impl AppState {
    pub fn new(
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
        services: Services,
        page_size: usize,
    ) -> Self {
        Self {
            running: true,
            focus: Focus::Grid,
            view: ViewState::new(page_size),
            search: InputBuffer::new(),
            grid: GridState::new(),
            tags: TagPanelState::new(),
            filters_open: false,
            show_help: false,
            notifications: Vec::new(),
            tick: 0,
            last_area: Cell::new(Rect::default()),
            event_rx,
            services,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        self.dispatch(Msg::LoadRequested);

        while self.running {
            // Render
            terminal.draw(|frame| self.render(frame))?;

            // Select next event
            tokio::select! {
                _ = tick_interval.tick() => {
                    self.on_tick();
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        Ok(())
    }

    /// Feed one message through the reducer and start its effect, if any.
    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.view);
        let (next, effect) = state.apply(msg);
        self.view = next;
        self.grid.clamp(self.view.displayed().len());

        if let Some(effect) = effect {
            self.services.spawn_effect(effect);
        }
    }

    // ── Event handling ──────────────────────────────────────────────────

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => self.handle_input(&crossterm_event),
            AppEvent::Catalog(msg) => self.on_catalog(msg),
        }
    }

    fn on_catalog(&mut self, msg: Msg) {
        let notice = match &msg {
            Msg::CollectionLoaded(Ok(entities)) => Some((
                format!("Loaded {} Pokémon", entities.len()),
                NotificationLevel::Success,
            )),
            Msg::TypeMembershipLoaded { tag, result: Err(e) } => Some((
                format!("Could not load the '{tag}' type; showing all"),
                if e.is_network() {
                    NotificationLevel::Warning
                } else {
                    NotificationLevel::Error
                },
            )),
            _ => None,
        };

        self.dispatch(msg);

        if let Some((message, level)) = notice {
            self.push_notification(message, level);
        }
    }

    fn handle_input(&mut self, event: &Event) {
        // Ctrl+C quits from anywhere
        if is_ctrl_c(event) {
            self.running = false;
            return;
        }

        // Priority 1: Help modal
        if self.show_help {
            if let Some(action) = self.map_help_input(event) {
                self.handle_action(action);
            }
            return;
        }

        // Priority 2: Detail overlay consumes all input while shown
        if self.view.detail().is_open() {
            if let Some(signal) = detail::dismiss_signal(event, self.last_area.get()) {
                self.dispatch(Msg::Dismissed(signal));
            }
            return;
        }

        // Priority 3: Mouse routing by region
        if let Event::Mouse(mouse) = event {
            if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                let layout = self.layout();
                if contains(layout.search, mouse.column, mouse.row) {
                    self.focus = Focus::Search;
                    return;
                }
                if let Some(panel) = layout.filters {
                    if contains(panel, mouse.column, mouse.row) {
                        self.focus = Focus::Filters;
                        self.handle_tag_input(event);
                        return;
                    }
                }
            }
            self.handle_grid_input(event);
            return;
        }

        // Priority 4: Focused region
        let consumed = match self.focus {
            Focus::Search => self.handle_search_input(event),
            Focus::Filters => self.handle_tag_input(event),
            Focus::Grid => self.handle_grid_input(event),
        };
        if consumed {
            return;
        }

        // Priority 5: Global keybindings
        if let Some(action) = self.map_input_to_action(event) {
            self.handle_action(action);
        }
    }

    /// Search bar input. Returns true if consumed.
    fn handle_search_input(&mut self, event: &Event) -> bool {
        let Event::Key(key @ KeyEvent {
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return false;
        };

        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
                self.focus = Focus::Grid;
                true
            }
            _ => {
                if self.search.handle_key(key) == EditOutcome::Changed {
                    self.grid.reset();
                    self.dispatch(Msg::SearchChanged(self.search.text().to_string()));
                }
                true
            }
        }
    }

    fn handle_tag_input(&mut self, event: &Event) -> bool {
        let panel = self.layout().filters.unwrap_or_default();
        match self.tags.handle_input(event, panel) {
            TagInput::Consumed => true,
            TagInput::Toggle(tag) => {
                self.grid.reset();
                self.dispatch(Msg::TypeTagToggled(tag.to_string()));
                true
            }
            TagInput::Close => {
                self.focus = Focus::Grid;
                true
            }
            TagInput::Ignored => false,
        }
    }

    fn handle_grid_input(&mut self, event: &Event) -> bool {
        let len = self.view.displayed().len();
        match self.grid.handle_input(event, len) {
            GridInput::Consumed => true,
            GridInput::Open(index) => {
                self.open_index(index);
                true
            }
            GridInput::Ignored => false,
        }
    }

    fn open_index(&mut self, index: usize) {
        if let Some(entity) = self.view.displayed().get(index) {
            let id = entity.id;
            log::debug!("Opening detail for #{id}");
            self.dispatch(Msg::EntitySelected(id));
        }
    }

    // ── Input mapping ───────────────────────────────────────────────────

    /// Map help modal input to action.
    fn map_help_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        match code {
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::CloseHelp),
            _ => None,
        }
    }

    fn map_input_to_action(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (*modifiers, *code) {
            (KeyModifiers::NONE | KeyModifiers::SHIFT, code) => match code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('?') => Some(Action::ShowHelp),
                KeyCode::Char('/') => Some(Action::FocusSearch),
                KeyCode::Char('f') => Some(Action::ToggleFilters),
                KeyCode::Char('r') => Some(Action::Reload),
                KeyCode::Char('c') => Some(Action::ClearSearch),
                KeyCode::Esc => Some(Action::Dismiss),
                KeyCode::Tab => Some(Action::FocusFilters),
                _ => None,
            },
            _ => None,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::FocusSearch => self.focus = Focus::Search,
            Action::FocusFilters => {
                self.filters_open = true;
                self.focus = Focus::Filters;
            }
            Action::ToggleFilters => {
                self.filters_open = !self.filters_open;
                self.focus = if self.filters_open {
                    Focus::Filters
                } else {
                    Focus::Grid
                };
            }
            Action::Reload => {
                if !self.view.collection().is_loading() {
                    self.dispatch(Msg::LoadRequested);
                    self.push_notification("Reloading catalog".into(), NotificationLevel::Info);
                }
            }
            Action::ClearSearch => {
                if !self.search.is_empty() {
                    self.search.clear();
                    self.grid.reset();
                    self.dispatch(Msg::SearchCleared);
                }
            }
            Action::Dismiss => {
                if self.view.detail().error().is_some() {
                    self.dispatch(Msg::ErrorAcknowledged);
                } else if self.filters_open {
                    self.filters_open = false;
                }
            }
        }
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notifications.push(Notification::new(message, level));

        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
    }

    /// Tick: advance spinners, decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn layout(&self) -> AppLayout {
        AppLayout::compute(
            self.last_area.get(),
            self.filters_open,
            self.view.banner().is_some(),
        )
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area.set(area);
        let layout = self.layout();

        filter_bar::render_search(frame, layout.search, &self.search, self.focus == Focus::Search);

        if let Some(panel) = layout.filters {
            self.tags.render(
                frame,
                panel,
                self.view.filter(),
                self.view.active_tag_members(),
                self.focus == Focus::Filters,
            );
        }

        if let (Some(banner_area), Some(message)) = (layout.banner, self.view.banner()) {
            self.render_banner(frame, banner_area, message);
        }

        self.grid.render(
            frame,
            layout.grid,
            self.view.displayed(),
            self.view.collection().status(),
            self.focus == Focus::Grid,
            self.tick,
        );

        self.render_status_bar(frame, layout.status);

        // Overlays
        detail::render(frame, area, self.view.detail().status(), self.tick);

        self.render_notifications(frame, area);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    /// Key hint for the banner; follows the same precedence as the message.
    fn banner_hint(&self) -> &'static str {
        if self.view.collection().error().is_some() {
            "  [r] retry"
        } else {
            "  [Esc] dismiss"
        }
    }

    fn render_banner(&self, frame: &mut Frame, area: Rect, message: &str) {
        let hint = self.banner_hint();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ERROR));
        let line = Line::from(vec![
            Span::styled(" ✗ ", Style::default().fg(theme::ERROR).bold()),
            Span::styled(message.to_string(), Style::default().fg(theme::TEXT)),
            Span::styled(hint, theme::key_hint()),
        ]);
        frame.render_widget(
            Paragraph::new(line).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let collection = self.view.collection();
        let load_status = match collection.status() {
            CollectionStatus::Loading => {
                Span::styled("loading", Style::default().fg(theme::PRIMARY_LIGHT))
            }
            CollectionStatus::Failed(_) => Span::styled("error", Style::default().fg(theme::ERROR)),
            CollectionStatus::Ready => Span::styled(
                format!("{}/{}", self.view.displayed().len(), collection.all().len()),
                Style::default().fg(theme::TEXT_MUTED),
            ),
            CollectionStatus::Idle => Span::styled("idle", theme::muted()),
        };

        let mode_indicator = if self.focus == Focus::Search {
            Span::styled(" SEARCH ", theme::insert_badge())
        } else {
            Span::raw("")
        };

        let tag_status = match (self.view.filter().type_tag(), self.view.tag_resolution()) {
            (Some(tag), TagResolution::Pending) => {
                Span::styled(format!("{tag}…"), theme::dim())
            }
            (Some(tag), _) => Span::styled(tag.to_string(), theme::type_badge(tag)),
            (None, _) => Span::styled("any", theme::muted()),
        };

        let status = Line::from(vec![
            Span::styled(" POKEVIEW ", theme::brand_badge()),
            Span::raw(" "),
            mode_indicator,
            Span::raw(" "),
            Span::styled(
                self.focus.label(),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            load_status,
            Span::raw(" │ "),
            Span::styled("Type:", theme::key_hint()),
            Span::raw(" "),
            tag_status,
            Span::raw(" │ "),
            Span::styled("/", theme::key_hint()),
            Span::raw(":search "),
            Span::styled("f", theme::key_hint()),
            Span::raw(":type "),
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 50.min(area.width.saturating_sub(2));
        let height = self.notifications.len() as u16;
        let x = area.width.saturating_sub(max_width + 1);
        let y = 1;

        let notification_area = Rect::new(x, y, max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                    NotificationLevel::Error => ("✗", theme::ERROR),
                };
                Line::from(vec![
                    Span::styled(format!(" {prefix} "), Style::default().fg(color).bold()),
                    Span::raw(&n.message),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(Paragraph::new(lines), notification_area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 80, area);

        let keybindings = vec![
            ("Global:", ""),
            ("q / Ctrl+C", "Quit"),
            ("?", "Toggle this help"),
            ("/", "Focus search"),
            ("c", "Clear search"),
            ("f", "Show / hide type filter"),
            ("Tab", "Focus type filter"),
            ("r", "Reload catalog"),
            ("Esc", "Dismiss error / close panel"),
            ("", ""),
            ("Grid:", ""),
            ("h/j/k/l, arrows", "Move selection"),
            ("g / G", "First / last"),
            ("PgUp / PgDn", "Page"),
            ("Enter / click", "Open details"),
            ("", ""),
            ("Search:", ""),
            ("Ctrl+W", "Delete word"),
            ("Ctrl+U", "Clear input"),
            ("Enter / Esc", "Back to grid"),
            ("", ""),
            ("Type filter:", ""),
            ("h/l, arrows", "Select type"),
            ("Enter / Space", "Toggle type"),
            ("Esc", "Back to grid"),
            ("", ""),
            ("Details:", ""),
            ("Esc", "Cancel"),
            ("x / click [x]", "Close"),
            ("click outside", "Close"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                " Keybindings",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
        ];

        for (key, desc) in &keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {key}"),
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<18}", key),
                        Style::default().fg(theme::PRIMARY_LIGHT).bold(),
                    ),
                    Span::raw(*desc),
                ]));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("?", Style::default().fg(theme::PRIMARY_LIGHT).bold()),
            Span::raw(" or "),
            Span::styled("Esc", Style::default().fg(theme::PRIMARY_LIGHT).bold()),
            Span::raw(" to close"),
        ]));

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

fn is_ctrl_c(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            ..
        })
    )
}

/// Calculate a centered rect using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

//! Card grid showing the displayed subset of the catalog.
//!
//! Navigation with arrows or h/j/k/l, Enter opens the detail viewer.
//! The grid remembers the geometry of its last render so mouse clicks and
//! vertical movement know how many columns are on screen.

use std::cell::Cell;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;
use crate::core::catalog::format::{display_name, dex_number};
use crate::core::catalog::{CollectionStatus, EntityRef};

/// Card width including borders.
pub const CARD_WIDTH: u16 = 20;
/// Card height including borders.
pub const CARD_HEIGHT: u16 = 4;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Result of feeding input to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridInput {
    /// Cursor moved or key otherwise handled.
    Consumed,
    /// Open the detail viewer for the card at this index.
    Open(usize),
    Ignored,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct GridGeometry {
    area: Rect,
    columns: usize,
    visible_rows: usize,
}

// ── State ──────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct GridState {
    cursor: usize,
    scroll_row: Cell<usize>,
    geometry: Cell<GridGeometry>,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Columns that fit in `width` (always at least one).
    pub fn columns_for(width: u16) -> usize {
        usize::from((width / CARD_WIDTH).max(1))
    }

    fn columns(&self) -> usize {
        self.geometry.get().columns.max(1)
    }

    /// Keep the cursor inside a list of `len` cards.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.scroll_row.set(0);
    }

    pub fn handle_input(&mut self, event: &Event, len: usize) -> GridInput {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, len),
            Event::Mouse(mouse) => self.handle_mouse(mouse, len),
            _ => GridInput::Ignored,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, len: usize) -> GridInput {
        if len == 0 {
            return GridInput::Ignored;
        }
        let columns = self.columns();
        let last = len - 1;

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('l') | KeyCode::Right) => {
                self.cursor = (self.cursor + 1).min(last);
            }
            (KeyModifiers::NONE, KeyCode::Char('h') | KeyCode::Left) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
                self.cursor = (self.cursor + columns).min(last);
            }
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
                self.cursor = self.cursor.saturating_sub(columns);
            }
            (KeyModifiers::NONE, KeyCode::PageDown) => {
                let page = columns * self.geometry.get().visible_rows.max(1);
                self.cursor = (self.cursor + page).min(last);
            }
            (KeyModifiers::NONE, KeyCode::PageUp) => {
                let page = columns * self.geometry.get().visible_rows.max(1);
                self.cursor = self.cursor.saturating_sub(page);
            }
            (KeyModifiers::NONE, KeyCode::Char('g') | KeyCode::Home) => self.cursor = 0,
            (KeyModifiers::SHIFT, KeyCode::Char('G')) | (KeyModifiers::NONE, KeyCode::End) => {
                self.cursor = last;
            }
            (KeyModifiers::NONE, KeyCode::Enter | KeyCode::Char(' ')) => {
                return GridInput::Open(self.cursor.min(last));
            }
            _ => return GridInput::Ignored,
        }
        GridInput::Consumed
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, len: usize) -> GridInput {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match self.card_at(mouse.column, mouse.row, len) {
                    Some(index) => {
                        self.cursor = index;
                        GridInput::Open(index)
                    }
                    None => GridInput::Ignored,
                }
            }
            MouseEventKind::ScrollDown => {
                self.cursor = (self.cursor + self.columns()).min(len.saturating_sub(1));
                GridInput::Consumed
            }
            MouseEventKind::ScrollUp => {
                self.cursor = self.cursor.saturating_sub(self.columns());
                GridInput::Consumed
            }
            _ => GridInput::Ignored,
        }
    }

    /// Index of the card under a terminal cell, using the last rendered geometry.
    pub fn card_at(&self, column: u16, row: u16, len: usize) -> Option<usize> {
        let geometry = self.geometry.get();
        let area = geometry.area;
        if column < area.x || row < area.y || column >= area.right() || row >= area.bottom() {
            return None;
        }

        let col = usize::from((column - area.x) / CARD_WIDTH);
        let visible_row = usize::from((row - area.y) / CARD_HEIGHT);
        if col >= geometry.columns || visible_row >= geometry.visible_rows {
            return None;
        }

        let index = (self.scroll_row.get() + visible_row) * geometry.columns + col;
        (index < len).then_some(index)
    }

    /// Adjust the scroll so the cursor row is on screen.
    fn sync_scroll(&self, columns: usize, visible_rows: usize) -> usize {
        let cursor_row = self.cursor / columns;
        let mut scroll = self.scroll_row.get();
        if cursor_row < scroll {
            scroll = cursor_row;
        } else if cursor_row >= scroll + visible_rows {
            scroll = cursor_row + 1 - visible_rows;
        }
        self.scroll_row.set(scroll);
        scroll
    }

    // ── Rendering ──────────────────────────────────────────────────────────

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        entities: &[EntityRef],
        status: &CollectionStatus,
        focused: bool,
        tick: u64,
    ) {
        let title = format!("Pokémon ({})", entities.len());
        let block = if focused {
            theme::block_focused(&title)
        } else {
            theme::block_default(&title)
        };
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if entities.is_empty() {
            self.geometry.set(GridGeometry::default());
            let message = match status {
                CollectionStatus::Loading | CollectionStatus::Idle => {
                    let frame_idx = (tick as usize / 2) % SPINNER.len();
                    format!("{} Loading Pokémon...", SPINNER[frame_idx])
                }
                CollectionStatus::Failed(_) => "Nothing to show.".to_string(),
                CollectionStatus::Ready => "No Pokémon match that name.".to_string(),
            };
            frame.render_widget(
                Paragraph::new(vec![
                    Line::raw(""),
                    Line::from(Span::styled(message, theme::muted())),
                ])
                .alignment(Alignment::Center),
                inner,
            );
            return;
        }

        let columns = Self::columns_for(inner.width);
        let visible_rows = usize::from((inner.height / CARD_HEIGHT).max(1));
        self.geometry.set(GridGeometry {
            area: inner,
            columns,
            visible_rows,
        });
        let scroll = self.sync_scroll(columns, visible_rows);

        let first = scroll * columns;
        for (index, entity) in entities
            .iter()
            .enumerate()
            .skip(first)
            .take(columns * visible_rows)
        {
            let offset = index - first;
            let col = (offset % columns) as u16;
            let row = (offset / columns) as u16;
            let card = Rect::new(
                inner.x + col * CARD_WIDTH,
                inner.y + row * CARD_HEIGHT,
                CARD_WIDTH.min(inner.width),
                CARD_HEIGHT.min(inner.height.saturating_sub(row * CARD_HEIGHT)),
            );
            render_card(frame, card, entity, index == self.cursor && focused);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, entity: &EntityRef, selected: bool) {
    let border_style = if selected {
        Style::default()
            .fg(theme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        theme::border_default()
    };
    let name_style = if selected {
        theme::highlight()
    } else {
        Style::default().fg(theme::TEXT)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines = vec![
        Line::from(Span::styled(dex_number(entity.id), theme::dim())),
        Line::from(Span::styled(display_name(&entity.name), name_style)),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// ── Tests ──────────────────────────────────────────────────────────────────

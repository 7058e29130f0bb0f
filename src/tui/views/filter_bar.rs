//! Search bar and type-tag panel.

use crossterm::event::{
    Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::catalog::{FilterState, TagMembers, FILTER_TAGS};
use crate::tui::theme;
use crate::tui::widgets::input_buffer::InputBuffer;

const SEARCH_PLACEHOLDER: &str = "Search Pokémon by name...";

// ── Search bar ─────────────────────────────────────────────────────────────

/// Render the search input. Places the terminal cursor when focused.
pub fn render_search(frame: &mut Frame, area: Rect, input: &InputBuffer, focused: bool) {
    let block = if focused {
        theme::block_focused("Search")
    } else {
        theme::block_default("Search [/]")
    };
    let inner = block.inner(area);

    let line = if input.is_empty() && !focused {
        Line::from(Span::styled(SEARCH_PLACEHOLDER, theme::dim()))
    } else {
        Line::from(vec![
            Span::styled("› ", theme::highlight()),
            Span::styled(input.text().to_string(), Style::default().fg(theme::TEXT)),
        ])
    };
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused && inner.width > 2 {
        let column = (input.cursor_column() as u16 + 2).min(inner.width - 1);
        frame.set_cursor_position((inner.x + column, inner.y));
    }
}

// ── Tag panel ──────────────────────────────────────────────────────────────

/// What the tag panel wants done with an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagInput {
    Consumed,
    Toggle(&'static str),
    /// Leave the panel.
    Close,
    Ignored,
}

#[derive(Debug, Default)]
pub struct TagPanelState {
    selected: usize,
}

impl TagPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &'static str {
        FILTER_TAGS[self.selected]
    }

    /// `area` is the panel's full rect, needed for mouse hit-testing.
    pub fn handle_input(&mut self, event: &Event, area: Rect) -> TagInput {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match (key.modifiers, key.code) {
                (KeyModifiers::NONE, KeyCode::Left | KeyCode::Char('h')) => {
                    self.selected = self.selected.saturating_sub(1);
                    TagInput::Consumed
                }
                (KeyModifiers::NONE, KeyCode::Right | KeyCode::Char('l')) => {
                    self.selected = (self.selected + 1).min(FILTER_TAGS.len() - 1);
                    TagInput::Consumed
                }
                (KeyModifiers::NONE, KeyCode::Enter | KeyCode::Char(' ')) => {
                    TagInput::Toggle(self.selected())
                }
                (KeyModifiers::NONE, KeyCode::Esc | KeyCode::Tab | KeyCode::Char('f')) => {
                    TagInput::Close
                }
                _ => TagInput::Ignored,
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                match tag_at(area, mouse.column, mouse.row) {
                    Some(index) => {
                        self.selected = index;
                        TagInput::Toggle(FILTER_TAGS[index])
                    }
                    None => TagInput::Ignored,
                }
            }
            _ => TagInput::Ignored,
        }
    }

    /// `members` is what is known about the selected tag, if any.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        filter: &FilterState,
        members: Option<&TagMembers>,
        focused: bool,
    ) {
        let block = if focused {
            theme::block_focused("Type")
        } else {
            theme::block_default("Type [f]")
        };

        let mut spans = Vec::with_capacity(FILTER_TAGS.len() * 2 + 1);
        for (i, tag) in FILTER_TAGS.iter().enumerate() {
            let active = filter.type_tag() == Some(*tag);
            let mut style = if active {
                theme::type_badge(tag)
            } else {
                Style::default().fg(theme::type_color(tag))
            };
            if focused && i == self.selected {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            spans.push(Span::styled(format!(" {tag} "), style));
            spans.push(Span::raw(" "));
        }
        match members {
            Some(TagMembers::Pending) => spans.push(Span::styled("loading…", theme::dim())),
            Some(TagMembers::Failed(_)) => {
                spans.push(Span::styled("unavailable", Style::default().fg(theme::WARNING)))
            }
            _ => {}
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}

/// Index of the tag badge under a cell of the panel's `area`.
///
/// Badges are laid out left to right as `" tag "` followed by one space.
fn tag_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    let inner_y = area.y + 1;
    if row != inner_y || column <= area.x {
        return None;
    }
    let mut x = area.x + 1;
    for (i, tag) in FILTER_TAGS.iter().enumerate() {
        let width = tag.chars().count() as u16 + 2;
        if column >= x && column < x + width {
            return Some(i);
        }
        x += width + 1;
    }
    None
}

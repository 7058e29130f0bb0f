//! Detail overlay for a single Pokémon.
//!
//! Drawn on top of the grid while the loader is loading or open. Input
//! mapping lives here too: the overlay decides which terminal events count
//! as a close action, a cancel key or an outside click.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::core::catalog::format::{
    dex_number, display_name, height_m, stat_label, stat_ratio, weight_kg,
};
use crate::core::catalog::{DetailStatus, DismissSignal, EntityDetail};
use crate::tui::theme;

const OVERLAY_WIDTH: u16 = 64;
const OVERLAY_HEIGHT: u16 = 22;
const STAT_LABEL_WIDTH: usize = 8;
const CLOSE_LABEL: &str = "[x]";

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Overlay rectangle, centered in `area`.
pub fn overlay_rect(area: Rect) -> Rect {
    let width = OVERLAY_WIDTH.min(area.width.saturating_sub(4));
    let height = OVERLAY_HEIGHT.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Cell range of the close button on the overlay's top border.
fn close_button(overlay: Rect) -> Rect {
    let width = CLOSE_LABEL.len() as u16;
    Rect::new(
        overlay.right().saturating_sub(width + 2),
        overlay.y,
        width,
        1,
    )
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Map a terminal event to a dismissal, given the full screen `area`.
pub fn dismiss_signal(event: &Event, area: Rect) -> Option<DismissSignal> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Esc => Some(DismissSignal::CancelKey),
            KeyCode::Char('x') | KeyCode::Char('q') => Some(DismissSignal::CloseAction),
            _ => None,
        },
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            let overlay = overlay_rect(area);
            if contains(close_button(overlay), mouse.column, mouse.row) {
                Some(DismissSignal::CloseAction)
            } else if !contains(overlay, mouse.column, mouse.row) {
                Some(DismissSignal::OutsideClick)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Render the overlay for `status`. Nothing is drawn when closed.
pub fn render(frame: &mut Frame, area: Rect, status: DetailStatus<'_>, tick: u64) {
    let modal = overlay_rect(area);

    match status {
        DetailStatus::Closed | DetailStatus::Error(_) => {}
        DetailStatus::Loading(id) => {
            let inner = frame_modal(frame, modal, &dex_number(id), theme::border_focused());
            let spinner = SPINNER[(tick as usize / 2) % SPINNER.len()];
            let lines = vec![
                Line::raw(""),
                Line::from(Span::styled(
                    format!("{spinner} Loading Pokémon details..."),
                    theme::muted(),
                )),
            ];
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        }
        DetailStatus::Loaded(detail) => {
            let title = format!("{} {}", dex_number(detail.id), display_name(&detail.name));
            let inner = frame_modal(frame, modal, &title, accent(detail));
            render_detail(frame, inner, detail);
        }
    }
}

/// Border style for a loaded record, coloured by its first type.
fn accent(detail: &EntityDetail) -> Style {
    detail
        .primary_type()
        .map(|tag| Style::default().fg(theme::type_color(tag)))
        .unwrap_or_else(theme::border_focused)
}

fn frame_modal(frame: &mut Frame, modal: Rect, title: &str, border: Style) -> Rect {
    frame.render_widget(Clear, modal);
    let block = Block::default()
        .title(Span::styled(format!(" {title} "), theme::title()))
        .title(
            Line::from(Span::styled(format!("{CLOSE_LABEL} "), theme::key_hint()))
                .alignment(Alignment::Right),
        )
        .borders(Borders::ALL)
        .border_style(border)
        .style(Style::default().bg(theme::BG_BASE));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);
    inner
}

fn render_detail(frame: &mut Frame, area: Rect, detail: &EntityDetail) {
    let stats_height = detail.stats.len() as u16 + 1;
    let rows = Layout::vertical([
        Constraint::Length(2),            // Types
        Constraint::Length(stats_height), // Stats
        Constraint::Length(3),            // Measurements
        Constraint::Min(1),               // Abilities + artwork
    ])
    .split(area);

    // Types
    let mut type_spans = vec![Span::raw(" ")];
    for tag in &detail.types {
        type_spans.push(Span::styled(format!(" {tag} "), theme::type_badge(tag)));
        type_spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(type_spans)), rows[0]);

    // Stats
    let bar_width = usize::from(rows[1].width).saturating_sub(STAT_LABEL_WIDTH + 8);
    let mut stat_lines = vec![Line::from(Span::styled(" Base stats", theme::heading()))];
    for stat in &detail.stats {
        stat_lines.push(stat_line(stat_label(&stat.name), stat.value, bar_width));
    }
    frame.render_widget(Paragraph::new(stat_lines), rows[1]);

    // Measurements
    let measurements = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled(" Height: ", theme::muted()),
            Span::styled(height_m(detail.height), Style::default().fg(theme::TEXT)),
            Span::raw("    "),
            Span::styled("Weight: ", theme::muted()),
            Span::styled(weight_kg(detail.weight), Style::default().fg(theme::TEXT)),
        ]),
    ];
    frame.render_widget(Paragraph::new(measurements), rows[2]);

    // Abilities + artwork
    let abilities = detail
        .abilities
        .iter()
        .map(|a| display_name(a))
        .collect::<Vec<_>>()
        .join(", ");
    let mut tail = vec![Line::from(vec![
        Span::styled(" Abilities: ", theme::muted()),
        Span::styled(abilities, Style::default().fg(theme::TEXT)),
    ])];
    if let Some(url) = &detail.image_url {
        tail.push(Line::from(vec![
            Span::styled(" Artwork: ", theme::muted()),
            Span::styled(url.clone(), theme::dim()),
        ]));
    }
    frame.render_widget(Paragraph::new(tail).wrap(Wrap { trim: false }), rows[3]);
}

fn stat_line(label: &str, value: u8, bar_width: usize) -> Line<'static> {
    let filled = (stat_ratio(value) * bar_width as f64).round() as usize;
    let empty = bar_width.saturating_sub(filled);
    let color = if value >= 100 {
        theme::SUCCESS
    } else if value >= 60 {
        theme::WARNING
    } else {
        theme::ERROR
    };

    Line::from(vec![
        Span::styled(
            format!(" {label:<width$}", width = STAT_LABEL_WIDTH),
            theme::muted(),
        ),
        Span::styled(
            format!("{value:>4} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(empty), Style::default().fg(theme::BG_TRACK)),
    ])
}

//! Centralized color theme for the pokeview TUI.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

// ── Primary palette ─────────────────────────────────────────────────────────

/// Blue: focused borders and the selected card.
pub const PRIMARY: Color = Color::Rgb(0x3B, 0x82, 0xF6);
/// Light blue: hints, secondary focus.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x93, 0xC5, 0xFD);

// ── Accent ──────────────────────────────────────────────────────────────────

/// Dex red: brand, titles.
pub const ACCENT: Color = Color::Rgb(0xEF, 0x44, 0x44);

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Base background.
pub const BG_BASE: Color = Color::Rgb(0x0F, 0x17, 0x2A);
/// Stat bar track.
pub const BG_TRACK: Color = Color::Rgb(0x33, 0x41, 0x55);

// ── Text ────────────────────────────────────────────────────────────────────

/// Primary text.
pub const TEXT: Color = Color::Rgb(0xE5, 0xE7, 0xEB);
/// Muted text: secondary labels.
pub const TEXT_MUTED: Color = Color::Rgb(0x9C, 0xA3, 0xAF);
/// Dim text: borders, faint hints.
pub const TEXT_DIM: Color = Color::Rgb(0x6B, 0x72, 0x80);

// ── Semantic ────────────────────────────────────────────────────────────────

pub const ERROR: Color = Color::Rgb(0xEF, 0x53, 0x50);
pub const SUCCESS: Color = Color::Rgb(0x66, 0xBB, 0x6A);
pub const WARNING: Color = Color::Rgb(0xFF, 0xA7, 0x26);
pub const INFO: Color = Color::Rgb(0x42, 0xA5, 0xF5);

// ── Type tags ───────────────────────────────────────────────────────────────

/// Badge color for a type tag. Unknown tags get a neutral grey.
pub fn type_color(tag: &str) -> Color {
    match tag {
        "normal" => Color::Rgb(0xA8, 0xA7, 0x7A),
        "fire" => Color::Rgb(0xEE, 0x81, 0x30),
        "water" => Color::Rgb(0x63, 0x90, 0xF0),
        "electric" => Color::Rgb(0xF7, 0xD0, 0x2C),
        "grass" => Color::Rgb(0x7A, 0xC7, 0x4C),
        "ice" => Color::Rgb(0x96, 0xD9, 0xD6),
        "fighting" => Color::Rgb(0xC2, 0x2E, 0x28),
        "poison" => Color::Rgb(0xA3, 0x3E, 0xA1),
        "ground" => Color::Rgb(0xE2, 0xBF, 0x65),
        "flying" => Color::Rgb(0xA9, 0x8F, 0xF3),
        "psychic" => Color::Rgb(0xF9, 0x55, 0x87),
        "bug" => Color::Rgb(0xA6, 0xB9, 0x1A),
        "rock" => Color::Rgb(0xB6, 0xA1, 0x36),
        "ghost" => Color::Rgb(0x73, 0x57, 0x97),
        "dragon" => Color::Rgb(0x6F, 0x35, 0xFC),
        "dark" => Color::Rgb(0x70, 0x57, 0x46),
        "steel" => Color::Rgb(0xB7, 0xB7, 0xCE),
        "fairy" => Color::Rgb(0xD6, 0x85, 0xAD),
        _ => TEXT_MUTED,
    }
}

/// Filled badge for a type tag.
pub fn type_badge(tag: &str) -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(type_color(tag))
        .add_modifier(Modifier::BOLD)
}

// ── Style helpers ───────────────────────────────────────────────────────────

/// Accent-colored bold text (titles).
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Section header style.
pub fn heading() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY)
}

pub fn border_default() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Highlighted/selected item.
pub fn highlight() -> Style {
    Style::default().fg(PRIMARY_LIGHT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "[q]:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Search-mode badge.
pub fn insert_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY_LIGHT)
        .add_modifier(Modifier::BOLD)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A bordered block with focused styling.
pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_focused())
}

/// A bordered block with default (unfocused) styling.
pub fn block_default(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_default())
}

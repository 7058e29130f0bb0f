//! Root layout computation for search bar + filter panel + grid + status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the search bar (bordered single line).
pub const SEARCH_HEIGHT: u16 = 3;
/// Height of the expanded type-tag panel.
pub const FILTERS_HEIGHT: u16 = 3;
/// Height of the error banner.
pub const BANNER_HEIGHT: u16 = 3;

/// Computed layout regions for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub search: Rect,
    /// Type-tag panel (None when collapsed).
    pub filters: Option<Rect>,
    /// Error banner (None when there is nothing to report).
    pub banner: Option<Rect>,
    /// Card grid.
    pub grid: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

impl AppLayout {
    /// Compute layout regions from the terminal area.
    pub fn compute(area: Rect, filters_open: bool, has_banner: bool) -> Self {
        let filters_height = if filters_open { FILTERS_HEIGHT } else { 0 };
        let banner_height = if has_banner { BANNER_HEIGHT } else { 0 };

        let rows = Layout::vertical([
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Length(filters_height),
            Constraint::Length(banner_height),
            Constraint::Min(1),    // Grid
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        AppLayout {
            search: rows[0],
            filters: filters_open.then_some(rows[1]),
            banner: has_banner.then_some(rows[2]),
            grid: rows[3],
            status: rows[4],
        }
    }
}

//! Detail Loader
//!
//! Fetches one full entity record on demand and tracks the detail viewer:
//!
//! ```text
//! Closed --select--> Loading --resolve(ok)--> Open
//!                       |    --resolve(err)-> Closed + error
//! Loading | Open --dismiss--> Closed
//! ```
//!
//! Every selection allocates a fresh [`RequestToken`]. A result is applied
//! only if its token is the one the viewer is currently waiting on, so
//! superseded fetches and fetches resolving after a dismiss are dropped.

use super::client::CatalogSource;
use super::error::{CatalogError, Result};
use super::models::EntityDetail;

/// Fetch and convert one entity record.
pub async fn load_detail(source: &dyn CatalogSource, id: u32) -> Result<EntityDetail> {
    let raw = source.fetch_detail(id).await?;
    EntityDetail::try_from(raw)
}

/// Monotonically increasing id of a detail request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Ways the user can close the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissSignal {
    /// Explicit close control.
    CloseAction,
    /// Interaction with the area around the viewer.
    OutsideClick,
    /// Cancel key (Escape).
    CancelKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Closed,
    Loading { id: u32, token: RequestToken },
    Open(Box<EntityDetail>),
}

/// What the display layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailStatus<'a> {
    Closed,
    Loading(u32),
    Loaded(&'a EntityDetail),
    Error(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLoader {
    last_token: u64,
    view: DetailView,
    error: Option<String>,
}

impl Default for DetailLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailLoader {
    pub fn new() -> Self {
        Self {
            last_token: 0,
            view: DetailView::Closed,
            error: None,
        }
    }

    /// Start loading `id`, superseding whatever was pending or open.
    pub fn select(self, id: u32) -> (Self, RequestToken) {
        let token = RequestToken(self.last_token + 1);
        let next = Self {
            last_token: token.0,
            view: DetailView::Loading { id, token },
            error: None,
        };
        (next, token)
    }

    /// Apply a fetch result. Stale tokens leave the loader untouched.
    pub fn resolve(self, token: RequestToken, result: Result<EntityDetail>) -> Self {
        if !self.is_awaiting(token) {
            log::debug!("Discarding stale detail result (token {})", token.0);
            return self;
        }

        match result {
            Ok(detail) => Self {
                view: DetailView::Open(Box::new(detail)),
                error: None,
                ..self
            },
            Err(e) => {
                log::warn!("Detail fetch failed: {e}");
                Self {
                    view: DetailView::Closed,
                    error: Some(detail_error_message(&e)),
                    ..self
                }
            }
        }
    }

    /// Close the viewer. A pending fetch becomes stale.
    pub fn dismiss(self, signal: DismissSignal) -> Self {
        log::debug!("Detail viewer dismissed via {signal:?}");
        Self {
            view: DetailView::Closed,
            ..self
        }
    }

    /// Drop the last detail error.
    pub fn clear_error(self) -> Self {
        Self { error: None, ..self }
    }

    /// Whether `token` belongs to the request the viewer is waiting on.
    pub fn is_awaiting(&self, token: RequestToken) -> bool {
        matches!(self.view, DetailView::Loading { token: pending, .. } if pending == token)
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.view, DetailView::Closed)
    }

    pub fn view(&self) -> &DetailView {
        &self.view
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> DetailStatus<'_> {
        match (&self.view, &self.error) {
            (DetailView::Loading { id, .. }, _) => DetailStatus::Loading(*id),
            (DetailView::Open(detail), _) => DetailStatus::Loaded(detail),
            (DetailView::Closed, Some(message)) => DetailStatus::Error(message),
            (DetailView::Closed, None) => DetailStatus::Closed,
        }
    }
}

fn detail_error_message(e: &CatalogError) -> String {
    match e {
        CatalogError::Status { status: 404, .. } => "Pokémon not found".to_string(),
        other => format!("Failed to fetch Pokémon details: {other}"),
    }
}

//! Collection Store
//!
//! Holds the full list fetched from the listing endpoint and the subset
//! currently on screen. Transitions consume the store and return the next
//! one, so the owning view state stays a plain value.

use std::sync::Arc;

use super::client::CatalogSource;
use super::error::Result;
use super::filter::{apply_filter, FilterState, TypeMembership};
use super::models::EntityRef;

/// Fixed page size of the initial listing fetch.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Fetch one page of entity references.
///
/// Exactly one request, no retry. Any malformed resource url fails the
/// whole load.
pub async fn load_collection(source: &dyn CatalogSource, page_size: usize) -> Result<Vec<EntityRef>> {
    let page = source.fetch_listing(page_size).await?;
    let entities = page.into_entities()?;
    log::info!("Loaded {} catalog entries", entities.len());
    Ok(entities)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionStatus {
    /// Nothing requested yet.
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct CollectionStore {
    all: Arc<[EntityRef]>,
    displayed: Vec<EntityRef>,
    status: CollectionStatus,
}

impl Default for CollectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionStore {
    pub fn new() -> Self {
        Self {
            all: Arc::from(Vec::new()),
            displayed: Vec::new(),
            status: CollectionStatus::Idle,
        }
    }

    /// Mark a load in flight. Existing data stays visible until it resolves.
    pub fn loading(self) -> Self {
        Self {
            status: CollectionStatus::Loading,
            ..self
        }
    }

    /// Store a successful load. The displayed subset starts as the full list.
    pub fn populated(self, entities: Vec<EntityRef>) -> Self {
        let all: Arc<[EntityRef]> = Arc::from(entities);
        Self {
            displayed: all.to_vec(),
            all,
            status: CollectionStatus::Ready,
        }
    }

    /// Store a failed load: no data, only the message.
    pub fn failed(self, message: impl Into<String>) -> Self {
        Self {
            all: Arc::from(Vec::new()),
            displayed: Vec::new(),
            status: CollectionStatus::Failed(message.into()),
        }
    }

    /// Recompute the displayed subset from the full collection.
    pub fn refiltered(self, filter: &FilterState, membership: &TypeMembership) -> Self {
        let displayed = apply_filter(&self.all, filter, membership);
        Self { displayed, ..self }
    }

    pub fn all(&self) -> &[EntityRef] {
        &self.all
    }

    pub fn displayed(&self) -> &[EntityRef] {
        &self.displayed
    }

    pub fn status(&self) -> &CollectionStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == CollectionStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            CollectionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

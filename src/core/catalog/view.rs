//! Catalog view state and its reducer.
//!
//! All UI-relevant catalog state lives in one [`ViewState`] value. Input and
//! network results arrive as [`Msg`]s; [`ViewState::apply`] consumes the
//! state and returns the next one plus at most one [`Effect`] describing
//! network work for the runtime to perform. Effects never touch the state
//! directly: their outcome comes back as another `Msg`.

use std::collections::HashSet;

use super::client::CatalogSource;
use super::detail::{load_detail, DetailLoader, DismissSignal, RequestToken};
use super::error::Result;
use super::filter::{FilterState, TagMembers, TagResolution, TypeMembership};
use super::models::{EntityDetail, EntityRef};
use super::store::{load_collection, CollectionStore, DEFAULT_PAGE_SIZE};

/// Discrete transitions of the catalog view.
#[derive(Debug, Clone)]
pub enum Msg {
    /// Fetch (or refetch) the listing page.
    LoadRequested,
    CollectionLoaded(Result<Vec<EntityRef>>),
    SearchChanged(String),
    SearchCleared,
    /// Select `tag`, or clear it if already active.
    TypeTagToggled(String),
    TypeMembershipLoaded {
        tag: String,
        result: Result<HashSet<u32>>,
    },
    EntitySelected(u32),
    DetailLoaded {
        token: RequestToken,
        result: Result<EntityDetail>,
    },
    Dismissed(DismissSignal),
    ErrorAcknowledged,
}

/// Network work requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadCollection { page_size: usize },
    LoadDetail { id: u32, token: RequestToken },
    LoadTypeMembership { tag: String },
}

impl Effect {
    /// Perform the request and wrap its outcome as the follow-up message.
    pub async fn execute(self, source: &dyn CatalogSource) -> Msg {
        match self {
            Effect::LoadCollection { page_size } => {
                Msg::CollectionLoaded(load_collection(source, page_size).await)
            }
            Effect::LoadDetail { id, token } => Msg::DetailLoaded {
                token,
                result: load_detail(source, id).await,
            },
            Effect::LoadTypeMembership { tag } => {
                let result = match source.fetch_type(&tag).await {
                    Ok(page) => page.into_member_ids(),
                    Err(e) => Err(e),
                };
                Msg::TypeMembershipLoaded { tag, result }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewState {
    collection: CollectionStore,
    filter: FilterState,
    membership: TypeMembership,
    detail: DetailLoader,
    page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            collection: CollectionStore::new(),
            filter: FilterState::default(),
            membership: TypeMembership::new(),
            detail: DetailLoader::new(),
            page_size,
        }
    }

    /// Run one transition.
    pub fn apply(self, msg: Msg) -> (Self, Option<Effect>) {
        match msg {
            Msg::LoadRequested => {
                if self.collection.is_loading() {
                    return (self, None);
                }
                let effect = Effect::LoadCollection {
                    page_size: self.page_size,
                };
                let next = Self {
                    collection: self.collection.loading(),
                    ..self
                };
                (next, Some(effect))
            }

            Msg::CollectionLoaded(Ok(entities)) => {
                let collection = self
                    .collection
                    .populated(entities)
                    .refiltered(&self.filter, &self.membership);
                (Self { collection, ..self }, None)
            }

            Msg::CollectionLoaded(Err(e)) => {
                if e.is_parse() {
                    log::error!("Catalog listing was malformed: {e}");
                } else {
                    log::warn!("Catalog load failed: {e}");
                }
                let collection = self
                    .collection
                    .failed(format!("Failed to fetch Pokémon data: {e}"));
                (Self { collection, ..self }, None)
            }

            Msg::SearchChanged(text) => {
                let filter = self.filter.clone().with_search(text);
                (self.with_filter(filter), None)
            }

            Msg::SearchCleared => {
                let filter = self.filter.clone().with_search("");
                (self.with_filter(filter), None)
            }

            Msg::TypeTagToggled(tag) => {
                let filter = self.filter.clone().toggle_type_tag(&tag);
                let wants_fetch =
                    filter.type_tag() == Some(tag.as_str()) && self.membership.needs_fetch(&tag);

                if wants_fetch {
                    let membership = self.membership.clone().with_pending(&tag);
                    let next = Self { membership, ..self }.with_filter(filter);
                    (next, Some(Effect::LoadTypeMembership { tag }))
                } else {
                    (self.with_filter(filter), None)
                }
            }

            Msg::TypeMembershipLoaded { tag, result } => {
                let membership = match result {
                    Ok(ids) => {
                        log::debug!("Type '{tag}' has {} members", ids.len());
                        self.membership.clone().with_known(&tag, ids)
                    }
                    Err(e) => {
                        log::warn!("Type membership for '{tag}' failed: {e}");
                        self.membership.clone().with_failed(&tag, e.to_string())
                    }
                };
                let filter = self.filter.clone();
                (Self { membership, ..self }.with_filter(filter), None)
            }

            Msg::EntitySelected(id) => {
                let (detail, token) = self.detail.select(id);
                (Self { detail, ..self }, Some(Effect::LoadDetail { id, token }))
            }

            Msg::DetailLoaded { token, result } => {
                let detail = self.detail.resolve(token, result);
                (Self { detail, ..self }, None)
            }

            Msg::Dismissed(signal) => {
                let detail = self.detail.dismiss(signal);
                (Self { detail, ..self }, None)
            }

            Msg::ErrorAcknowledged => {
                let detail = self.detail.clear_error();
                (Self { detail, ..self }, None)
            }
        }
    }

    fn with_filter(self, filter: FilterState) -> Self {
        let collection = self.collection.refiltered(&filter, &self.membership);
        Self {
            collection,
            filter,
            ..self
        }
    }

    pub fn collection(&self) -> &CollectionStore {
        &self.collection
    }

    pub fn displayed(&self) -> &[EntityRef] {
        self.collection.displayed()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Membership knowledge for the selected tag, if a tag is selected.
    pub fn active_tag_members(&self) -> Option<&TagMembers> {
        self.filter.type_tag().and_then(|tag| self.membership.get(tag))
    }

    pub fn tag_resolution(&self) -> TagResolution {
        self.membership.resolution(&self.filter)
    }

    pub fn detail(&self) -> &DetailLoader {
        &self.detail
    }

    /// Message for the banner above the grid, if any.
    pub fn banner(&self) -> Option<&str> {
        self.collection.error().or_else(|| self.detail.error())
    }
}

/// Fresh state with the listing load already requested.
#[cfg(test)]
pub(crate) fn initial(page_size: usize) -> (ViewState, Option<Effect>) {
    ViewState::new(page_size).apply(Msg::LoadRequested)
}

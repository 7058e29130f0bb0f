//! Creature catalog: listing, filtering and detail loading.
//!
//! - `client`: HTTP access to the remote API behind [`CatalogSource`]
//! - `store`: the fetched collection and its displayed subset
//! - `filter`: pure search / type-tag filtering
//! - `detail`: on-demand detail fetch with stale-result suppression
//! - `view`: the single view-state value and its reducer

pub mod client;
pub mod detail;
pub mod error;
pub mod filter;
pub mod format;
pub mod models;
pub mod store;
pub mod view;

pub use client::{CatalogClient, CatalogSource};
pub use detail::{DetailLoader, DetailStatus, DetailView, DismissSignal, RequestToken};
pub use error::{CatalogError, Result};
pub use filter::{
    apply_filter, FilterState, TagMembers, TagResolution, TypeMembership, FILTER_TAGS,
};
pub use models::{parse_entity_id, EntityDetail, EntityRef, Stat};
pub use store::{load_collection, CollectionStatus, CollectionStore, DEFAULT_PAGE_SIZE};
pub use view::{Effect, Msg, ViewState};

//! Filter Engine
//!
//! Pure functions computing the displayed subset of the collection from the
//! current [`FilterState`]. The subset is always recomputed from the full
//! collection, never from a previous result.
//!
//! Type tags are not present on [`EntityRef`], so tag filtering consults a
//! [`TypeMembership`] index fetched per tag. While a tag's membership is
//! unknown the tag filter is a no-op and reported as [`TagResolution::Pending`].

use std::collections::{HashMap, HashSet};

use super::models::EntityRef;

/// Type tags offered by the filter panel, in display order.
pub const FILTER_TAGS: [&str; 9] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
];

// ============================================================================
// Filter State
// ============================================================================

/// User-controlled filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search_text: String,
    type_tag: Option<String>,
}

impl FilterState {
    pub fn new(search_text: impl Into<String>, type_tag: Option<String>) -> Self {
        Self {
            search_text: search_text.into(),
            type_tag,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }

    /// Empty search and no tag: the filter is the identity.
    pub fn is_identity(&self) -> bool {
        self.search_text.is_empty() && self.type_tag.is_none()
    }

    pub fn with_search(self, search_text: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            ..self
        }
    }

    pub fn with_type_tag(self, type_tag: Option<String>) -> Self {
        Self { type_tag, ..self }
    }

    /// Select `tag`, or clear it if it is already the active tag.
    pub fn toggle_type_tag(self, tag: &str) -> Self {
        let type_tag = if self.type_tag.as_deref() == Some(tag) {
            None
        } else {
            Some(tag.to_string())
        };
        self.with_type_tag(type_tag)
    }
}

// ============================================================================
// Type Membership
// ============================================================================

/// Knowledge about one tag's members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagMembers {
    /// Fetch in flight.
    Pending,
    /// Ids of every entity carrying the tag.
    Known(HashSet<u32>),
    /// Fetch failed; the tag stays unresolved until requested again.
    Failed(String),
}

/// How the active tag is being applied to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagResolution {
    /// No tag selected.
    Inactive,
    /// Membership known, tag filter applied.
    Applied,
    /// Membership unknown, tag filter skipped.
    Pending,
}

/// Per-tag membership index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMembership {
    tags: HashMap<String, TagMembers>,
}

impl TypeMembership {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tag: &str) -> Option<&TagMembers> {
        self.tags.get(tag)
    }

    /// Member ids for `tag`, if known.
    pub fn members(&self, tag: &str) -> Option<&HashSet<u32>> {
        match self.tags.get(tag) {
            Some(TagMembers::Known(ids)) => Some(ids),
            _ => None,
        }
    }

    /// Whether a fetch for `tag` should be started.
    pub fn needs_fetch(&self, tag: &str) -> bool {
        matches!(self.tags.get(tag), None | Some(TagMembers::Failed(_)))
    }

    pub fn with_pending(mut self, tag: &str) -> Self {
        self.tags.insert(tag.to_string(), TagMembers::Pending);
        self
    }

    pub fn with_known(mut self, tag: &str, ids: HashSet<u32>) -> Self {
        self.tags.insert(tag.to_string(), TagMembers::Known(ids));
        self
    }

    pub fn with_failed(mut self, tag: &str, message: impl Into<String>) -> Self {
        self.tags
            .insert(tag.to_string(), TagMembers::Failed(message.into()));
        self
    }

    /// Resolution of the tag selected in `filter`.
    pub fn resolution(&self, filter: &FilterState) -> TagResolution {
        match filter.type_tag() {
            None => TagResolution::Inactive,
            Some(tag) if self.members(tag).is_some() => TagResolution::Applied,
            Some(_) => TagResolution::Pending,
        }
    }
}

// ============================================================================
// Filtering
// ============================================================================

/// Case-insensitive substring match. `needle_lower` must already be lowercase.
fn name_matches(name: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || name.to_lowercase().contains(needle_lower)
}

/// Compute the displayed subset. Order of `collection` is preserved.
pub fn apply_filter(
    collection: &[EntityRef],
    filter: &FilterState,
    membership: &TypeMembership,
) -> Vec<EntityRef> {
    if filter.is_identity() {
        return collection.to_vec();
    }

    let needle = filter.search_text().to_lowercase();
    let members = filter.type_tag().and_then(|tag| membership.members(tag));

    collection
        .iter()
        .filter(|entity| name_matches(&entity.name, &needle))
        .filter(|entity| members.map_or(true, |ids| ids.contains(&entity.id)))
        .cloned()
        .collect()
}

//! Property-based tests for catalog filtering
//!
//! Tests invariants:
//! - Identity filter returns the whole collection in order
//! - Soundness and completeness of the name / type predicates
//! - Result is an order-preserving subsequence of the collection
//! - Idempotence
//! - Pending or failed membership leaves the tag filter inactive

use std::collections::HashSet;

use proptest::prelude::*;

use crate::core::catalog::{apply_filter, EntityRef, FilterState, TypeMembership, FILTER_TAGS};

// ============================================================================
// Strategies
// ============================================================================

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z]{1,8}(-[a-z]{1,4})?"
}

/// Collection with unique ids, in listing order.
fn arb_collection() -> impl Strategy<Value = Vec<EntityRef>> {
    prop::collection::vec(arb_name(), 0..40).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let id = i as u32 + 1;
                EntityRef {
                    id,
                    name,
                    url: format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
                }
            })
            .collect()
    })
}

/// Search text, sometimes uppercase to exercise case folding.
fn arb_search() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-z]{1,3}",
        "[A-Z]{1,2}",
    ]
}

fn arb_tag() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        prop::sample::select(FILTER_TAGS.to_vec()).prop_map(|t| Some(t.to_string())),
    ]
}

fn arb_members() -> impl Strategy<Value = HashSet<u32>> {
    prop::collection::hash_set(1u32..50, 0..30)
}

fn is_subsequence(sub: &[EntityRef], full: &[EntityRef]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|s| it.any(|f| f == s))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Empty search and no tag is the identity.
    #[test]
    fn prop_identity_filter(collection in arb_collection()) {
        let out = apply_filter(&collection, &FilterState::default(), &TypeMembership::new());
        prop_assert_eq!(out, collection);
    }

    /// Output contains exactly the entries satisfying both predicates.
    #[test]
    fn prop_sound_and_complete(
        collection in arb_collection(),
        search in arb_search(),
        tag in arb_tag(),
        members in arb_members(),
    ) {
        let membership = match &tag {
            Some(t) => TypeMembership::new().with_known(t, members.clone()),
            None => TypeMembership::new(),
        };
        let filter = FilterState::new(search.clone(), tag.clone());
        let out = apply_filter(&collection, &filter, &membership);

        let needle = search.to_lowercase();
        let expected: Vec<EntityRef> = collection
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .filter(|e| tag.is_none() || members.contains(&e.id))
            .cloned()
            .collect();
        prop_assert_eq!(out, expected);
    }

    /// Displayed entries keep their relative collection order.
    #[test]
    fn prop_order_preserved(
        collection in arb_collection(),
        search in arb_search(),
    ) {
        let filter = FilterState::new(search, None);
        let out = apply_filter(&collection, &filter, &TypeMembership::new());
        prop_assert!(out.len() <= collection.len());
        prop_assert!(is_subsequence(&out, &collection));
    }

    /// Filtering the displayed subset again changes nothing.
    #[test]
    fn prop_idempotent(
        collection in arb_collection(),
        search in arb_search(),
        tag in arb_tag(),
        members in arb_members(),
    ) {
        let membership = match &tag {
            Some(t) => TypeMembership::new().with_known(t, members),
            None => TypeMembership::new(),
        };
        let filter = FilterState::new(search, tag);
        let once = apply_filter(&collection, &filter, &membership);
        let twice = apply_filter(&once, &filter, &membership);
        prop_assert_eq!(once, twice);
    }

    /// A tag whose membership is pending or failed only applies the name match.
    #[test]
    fn prop_unresolved_tag_is_noop(
        collection in arb_collection(),
        search in arb_search(),
        tag in prop::sample::select(FILTER_TAGS.to_vec()),
        failed in any::<bool>(),
    ) {
        let membership = if failed {
            TypeMembership::new().with_failed(tag, "boom")
        } else {
            TypeMembership::new().with_pending(tag)
        };
        let with_tag = FilterState::new(search.clone(), Some(tag.to_string()));
        let without_tag = FilterState::new(search, None);

        prop_assert_eq!(
            apply_filter(&collection, &with_tag, &membership),
            apply_filter(&collection, &without_tag, &membership)
        );
    }

    /// Search is case-insensitive.
    #[test]
    fn prop_case_insensitive(
        collection in arb_collection(),
        search in "[a-z]{1,3}",
    ) {
        let lower = apply_filter(&collection, &FilterState::new(search.clone(), None), &TypeMembership::new());
        let upper = apply_filter(&collection, &FilterState::new(search.to_uppercase(), None), &TypeMembership::new());
        prop_assert_eq!(lower, upper);
    }
}

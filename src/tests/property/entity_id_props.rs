//! Property-based tests for entity id extraction
//!
//! Tests invariants:
//! - Any positive id embedded at the id segment is recovered
//! - Trailing slash is optional
//! - Zero and non-numeric segments are rejected

use proptest::prelude::*;

use crate::core::catalog::{parse_entity_id, CatalogError, EntityRef};

proptest! {
    #[test]
    fn prop_roundtrips_positive_ids(id in 1u32.., slash in any::<bool>()) {
        let url = format!(
            "https://pokeapi.co/api/v2/pokemon/{id}{}",
            if slash { "/" } else { "" }
        );
        prop_assert_eq!(parse_entity_id(&url), Ok(id));
    }

    #[test]
    fn prop_entity_ref_takes_id_from_url(id in 1u32..100_000, name in "[a-z]{1,12}") {
        let url = format!("https://pokeapi.co/api/v2/pokemon/{id}/");
        let entity = EntityRef::from_resource(name.clone(), url).unwrap();
        prop_assert_eq!(entity.id, id);
        prop_assert_eq!(entity.name, name);
    }

    #[test]
    fn prop_rejects_non_numeric_segment(segment in "[a-z]{1,10}") {
        let url = format!("https://pokeapi.co/api/v2/pokemon/{segment}/");
        prop_assert!(matches!(
            parse_entity_id(&url),
            Err(CatalogError::MalformedEntity(_))
        ));
    }

    #[test]
    fn prop_rejects_short_urls(depth in 0usize..6) {
        let url = ["https:", "", "pokeapi.co", "api", "v2", "pokemon"][..depth].join("/");
        prop_assert!(parse_entity_id(&url).is_err());
    }
}

#[test]
fn test_zero_id_rejected() {
    assert!(matches!(
        parse_entity_id("https://pokeapi.co/api/v2/pokemon/0/"),
        Err(CatalogError::MalformedEntity(_))
    ));
}

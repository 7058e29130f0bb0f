//! Mock implementations for testing
//!
//! `MockSource` is a mockall-generated [`CatalogSource`]; the fixture
//! builders produce wire payloads shaped like the real API.

#![allow(dead_code)]

use async_trait::async_trait;
use mockall::mock;
use serde_json::{json, Value};

use crate::core::catalog::models::{RawDetail, RawListPage, RawTypePage};
use crate::core::catalog::{CatalogSource, Result};

pub const API_ROOT: &str = "https://pokeapi.co/api/v2";

// ============================================================================
// Catalog Source Mock
// ============================================================================

mock! {
    pub Source {}

    #[async_trait]
    impl CatalogSource for Source {
        async fn fetch_listing(&self, limit: usize) -> Result<RawListPage>;
        async fn fetch_detail(&self, id: u32) -> Result<RawDetail>;
        async fn fetch_type(&self, tag: &str) -> Result<RawTypePage>;
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Listing body with `count` sequential entries named `mon-{id}`.
pub fn listing_json(count: u32) -> Value {
    let results: Vec<Value> = (1..=count)
        .map(|id| {
            json!({
                "name": format!("mon-{id}"),
                "url": format!("{API_ROOT}/pokemon/{id}/"),
            })
        })
        .collect();
    json!({ "count": count, "next": null, "previous": null, "results": results })
}

/// Listing body from explicit `(id, name)` pairs.
pub fn named_listing_json(entries: &[(u32, &str)]) -> Value {
    let results: Vec<Value> = entries
        .iter()
        .map(|(id, name)| json!({ "name": name, "url": format!("{API_ROOT}/pokemon/{id}/") }))
        .collect();
    json!({ "results": results })
}

/// Detail body for Charizard (#6).
pub fn charizard_json() -> Value {
    json!({
        "id": 6,
        "name": "charizard",
        "height": 17,
        "weight": 905,
        "base_experience": 267,
        "sprites": {
            "front_default": "https://img.example/sprites/6.png",
            "other": {
                "official-artwork": {
                    "front_default": "https://img.example/artwork/6.png"
                }
            }
        },
        "types": [
            { "slot": 1, "type": { "name": "fire", "url": format!("{API_ROOT}/type/10/") } },
            { "slot": 2, "type": { "name": "flying", "url": format!("{API_ROOT}/type/3/") } }
        ],
        "stats": [
            { "base_stat": 78, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 84, "effort": 0, "stat": { "name": "attack", "url": "" } },
            { "base_stat": 78, "effort": 0, "stat": { "name": "defense", "url": "" } },
            { "base_stat": 109, "effort": 3, "stat": { "name": "special-attack", "url": "" } },
            { "base_stat": 85, "effort": 0, "stat": { "name": "special-defense", "url": "" } },
            { "base_stat": 100, "effort": 0, "stat": { "name": "speed", "url": "" } }
        ],
        "abilities": [
            { "ability": { "name": "blaze", "url": "" }, "is_hidden": false, "slot": 1 },
            { "ability": { "name": "solar-power", "url": "" }, "is_hidden": true, "slot": 3 }
        ]
    })
}

/// Type body listing the given member ids.
pub fn type_json(ids: &[u32]) -> Value {
    let members: Vec<Value> = ids
        .iter()
        .map(|id| {
            json!({
                "slot": 1,
                "pokemon": { "name": format!("mon-{id}"), "url": format!("{API_ROOT}/pokemon/{id}/") }
            })
        })
        .collect();
    json!({ "name": "fire", "pokemon": members })
}

pub fn raw_listing(entries: &[(u32, &str)]) -> RawListPage {
    serde_json::from_value(named_listing_json(entries)).expect("valid listing fixture")
}

pub fn raw_charizard() -> RawDetail {
    serde_json::from_value(charizard_json()).expect("valid detail fixture")
}

pub fn raw_type(ids: &[u32]) -> RawTypePage {
    serde_json::from_value(type_json(ids)).expect("valid type fixture")
}

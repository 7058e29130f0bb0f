//! Catalog data model.
//!
//! `Raw*` types mirror the JSON returned by the remote API and are only
//! used at the deserialization boundary. `EntityRef` and `EntityDetail`
//! are what the rest of the crate works with.

use std::collections::HashSet;

use serde::Deserialize;

use super::error::{CatalogError, Result};

/// Zero-based `/`-separated segment of a resource URL holding the id.
///
/// `https://pokeapi.co/api/v2/pokemon/42/` splits into
/// `["https:", "", "pokeapi.co", "api", "v2", "pokemon", "42", ""]`.
pub const ID_SEGMENT: usize = 6;

/// Highest value a base stat can take.
pub const MAX_STAT: u8 = 255;

// ============================================================================
// Domain Types
// ============================================================================

/// Lightweight reference produced by the listing fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub id: u32,
    pub name: String,
    pub url: String,
}

impl EntityRef {
    /// Build a reference, deriving the id from `url`.
    pub fn from_resource(name: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let id = parse_entity_id(&url)?;
        Ok(Self {
            id,
            name: name.into(),
            url,
        })
    }
}

/// A single base stat, kept in API order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub value: u8,
}

/// Full record for the currently viewed entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDetail {
    pub id: u32,
    pub name: String,
    pub image_url: Option<String>,
    pub types: Vec<String>,
    pub stats: Vec<Stat>,
    /// Decimetres.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    pub abilities: Vec<String>,
}

impl EntityDetail {
    /// First listed type; drives the detail overlay's accent colour.
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }
}

/// Extract the numeric identifier from a resource URL.
///
/// Fails on a missing segment, a non-integer, or zero rather than
/// producing a placeholder id.
pub fn parse_entity_id(url: &str) -> Result<u32> {
    let segment = url
        .split('/')
        .nth(ID_SEGMENT)
        .ok_or_else(|| CatalogError::MalformedEntity(url.to_string()))?;

    match segment.parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CatalogError::MalformedEntity(url.to_string())),
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// `{ name, url }` pair used throughout the API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNamedResource {
    pub name: String,
    pub url: String,
}

/// Listing endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct RawListPage {
    pub results: Vec<RawNamedResource>,
}

impl RawListPage {
    /// Convert every entry, failing on the first malformed url.
    pub fn into_entities(self) -> Result<Vec<EntityRef>> {
        self.results
            .into_iter()
            .map(|r| EntityRef::from_resource(r.name, r.url))
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawArtwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<RawArtwork>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: RawOtherSprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTypeSlot {
    #[serde(rename = "type")]
    pub kind: RawNamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawStat {
    pub base_stat: u16,
    pub stat: RawNamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAbilitySlot {
    pub ability: RawNamedResource,
}

/// Detail endpoint response (only the fields we display).
#[derive(Debug, Clone, Deserialize)]
pub struct RawDetail {
    pub id: u32,
    pub name: String,
    pub sprites: RawSprites,
    pub types: Vec<RawTypeSlot>,
    pub stats: Vec<RawStat>,
    pub height: u32,
    pub weight: u32,
    pub abilities: Vec<RawAbilitySlot>,
}

impl TryFrom<RawDetail> for EntityDetail {
    type Error = CatalogError;

    fn try_from(raw: RawDetail) -> Result<Self> {
        let stats = raw
            .stats
            .into_iter()
            .map(|s| {
                let value = u8::try_from(s.base_stat).map_err(|_| {
                    CatalogError::Parse(format!(
                        "stat {} out of range: {}",
                        s.stat.name, s.base_stat
                    ))
                })?;
                Ok(Stat {
                    name: s.stat.name,
                    value,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        // Official artwork first, default sprite as fallback.
        let image_url = raw
            .sprites
            .other
            .official_artwork
            .and_then(|a| a.front_default)
            .or(raw.sprites.front_default);

        Ok(EntityDetail {
            id: raw.id,
            name: raw.name,
            image_url,
            types: raw.types.into_iter().map(|t| t.kind.name).collect(),
            stats,
            height: raw.height,
            weight: raw.weight,
            abilities: raw.abilities.into_iter().map(|a| a.ability.name).collect(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTypeMember {
    pub pokemon: RawNamedResource,
}

/// Type endpoint response: every entity carrying the type.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTypePage {
    pub pokemon: Vec<RawTypeMember>,
}

impl RawTypePage {
    pub fn into_member_ids(self) -> Result<HashSet<u32>> {
        self.pokemon
            .into_iter()
            .map(|m| parse_entity_id(&m.pokemon.url))
            .collect()
    }
}

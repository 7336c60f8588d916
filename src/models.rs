//! Frontend Models
//!
//! Catalog records as the widget stores them, plus the wire shapes the
//! catalog service returns.

use serde::Deserialize;

/// A fully resolved catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    /// Image URL, empty when the catalog has none
    pub image: String,
    /// Category names in upstream slot order
    pub tags: Vec<String>,
}

impl Item {
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag == name)
    }
}

// ========================
// Wire Types
// ========================

/// `{name, url}` reference used by every list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of a list endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourcePage {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

impl ResourcePage {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub category: NamedResource,
}

/// Item detail record as served by the catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemDetail {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

impl From<ItemDetail> for Item {
    fn from(detail: ItemDetail) -> Self {
        Self {
            id: detail.id,
            name: detail.name,
            image: detail.sprites.front_default.unwrap_or_default(),
            tags: detail.types.into_iter().map(|slot| slot.category.name).collect(),
        }
    }
}

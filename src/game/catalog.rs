//! Item catalog: identity, display name and mass of every item in the world.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::errors::WorldError;
use super::types::{ItemId, Mass};

/// Immutable item definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub mass: Mass,
}

impl Item {
    pub fn new(id: &str, name: &str, mass: Mass) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.to_string(),
            mass,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: BTreeMap<ItemId, Item>,
}

impl ItemCatalog {
    /// Build the catalog, rejecting repeated identities.
    pub fn new(items: Vec<Item>) -> Result<Self, WorldError> {
        let mut map = BTreeMap::new();
        for item in items {
            if map.contains_key(&item.id) {
                return Err(WorldError::DuplicateItem(item.id));
            }
            map.insert(item.id.clone(), item);
        }
        Ok(Self { items: map })
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Mass of a catalogued item; unknown ids weigh nothing.
    pub fn mass_of(&self, id: &str) -> Mass {
        self.items.get(id).map(|item| item.mass).unwrap_or(Mass::ZERO)
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items.keys()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

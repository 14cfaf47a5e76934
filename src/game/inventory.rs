//! Player inventory and the mass policy that guards it
use std::collections::BTreeSet;

use super::catalog::{Item, ItemCatalog};
use super::types::{ItemId, Mass};

/// Default carrying capacity in kilograms.
pub const MAX_INVENTORY_MASS_KG: f64 = 3.0;

// ============================================================================
// Mass Policy
// ============================================================================

/// Calculate the total mass of a set of items
pub fn calculate_total_mass<'a>(
    ids: impl IntoIterator<Item = &'a ItemId>,
    catalog: &ItemCatalog,
) -> Mass {
    ids.into_iter().map(|id| catalog.mass_of(id.as_str())).sum()
}

/// True iff `held + candidate` stays within `capacity`. Exactly at capacity
/// is allowed.
pub fn within_capacity(held: Mass, candidate: Mass, capacity: Mass) -> bool {
    match held.checked_add(candidate) {
        Some(total) => total <= capacity,
        None => false,
    }
}

// ============================================================================
// Inventory
// ============================================================================

/// The set of items the player carries, capped by total mass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    held: BTreeSet<ItemId>,
    capacity: Mass,
}

impl Inventory {
    pub fn new(capacity: Mass) -> Self {
        Self {
            held: BTreeSet::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> Mass {
        self.capacity
    }

    pub fn contains(&self, id: &str) -> bool {
        self.held.contains(id)
    }

    pub fn ids(&self) -> &BTreeSet<ItemId> {
        &self.held
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    pub fn total_mass(&self, catalog: &ItemCatalog) -> Mass {
        calculate_total_mass(&self.held, catalog)
    }

    /// Check if the player could pick up `item` without exceeding capacity.
    pub fn can_take(&self, item: &Item, catalog: &ItemCatalog) -> bool {
        within_capacity(self.total_mass(catalog), item.mass, self.capacity)
    }

    /// Mass still available before the cap is reached.
    pub fn remaining(&self, catalog: &ItemCatalog) -> Mass {
        Mass::from_grams(
            self.capacity
                .grams()
                .saturating_sub(self.total_mass(catalog).grams()),
        )
    }

    // Insertion and removal go through ItemPlacement so the
    // one-location-per-item rule is kept in a single place.
    pub(crate) fn insert(&mut self, id: ItemId) -> bool {
        self.held.insert(id)
    }

    pub(crate) fn remove(&mut self, id: &str) -> Option<ItemId> {
        self.held.take(id)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

//! Where every item currently is.
//!
//! An item lives either in exactly one room or in the inventory. The only
//! mutations are [`ItemPlacement::take_item`] and [`ItemPlacement::drop_item`],
//! each of which moves one id between two containers or changes nothing.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use super::catalog::ItemCatalog;
use super::errors::ActionError;
use super::inventory::Inventory;
use super::types::{ItemId, Mass, RoomId};

/// A place an item can be.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Location {
    Room(RoomId),
    Inventory,
}

#[derive(Debug, Clone)]
pub struct ItemPlacement {
    rooms: BTreeMap<RoomId, BTreeSet<ItemId>>,
    inventory: Inventory,
}

impl ItemPlacement {
    /// Start with the given per-room contents and an empty inventory.
    pub fn new(rooms: BTreeMap<RoomId, BTreeSet<ItemId>>, capacity: Mass) -> Self {
        Self {
            rooms,
            inventory: Inventory::new(capacity),
        }
    }

    /// Items currently lying in `room`.
    pub fn items_in<'a>(&'a self, room: &str) -> impl Iterator<Item = &'a ItemId> + 'a {
        self.rooms.get(room).into_iter().flatten()
    }

    pub fn is_in_room(&self, room: &str, item: &str) -> bool {
        self.rooms
            .get(room)
            .map(|items| items.contains(item))
            .unwrap_or(false)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Move `item` from `room` into the inventory.
    ///
    /// Presence is checked before mass, so an absent item always reports
    /// [`ActionError::NotInRoom`] even when it would also be too heavy.
    pub fn take_item(
        &mut self,
        room: &str,
        item: &str,
        catalog: &ItemCatalog,
    ) -> Result<ItemId, ActionError> {
        let not_here = || ActionError::NotInRoom {
            item: item.to_string(),
        };

        if !self.is_in_room(room, item) {
            return Err(not_here());
        }
        let record = catalog.get(item).ok_or_else(not_here)?;
        if !self.inventory.can_take(record, catalog) {
            debug!(
                "Refusing {}: {} held + {} exceeds {}",
                item,
                self.inventory.total_mass(catalog),
                record.mass,
                self.inventory.capacity()
            );
            return Err(ActionError::TooHeavy {
                item: record.id.clone(),
            });
        }

        let removed = self
            .rooms
            .get_mut(room)
            .and_then(|items| items.take(item))
            .ok_or_else(not_here)?;
        self.inventory.insert(removed.clone());
        Ok(removed)
    }

    /// Move `item` from the inventory into `room`.
    pub fn drop_item(&mut self, room: &RoomId, item: &str) -> Result<ItemId, ActionError> {
        let removed = self.inventory.remove(item).ok_or_else(|| ActionError::NotHeld {
            item: item.to_string(),
        })?;
        self.rooms
            .entry(room.clone())
            .or_default()
            .insert(removed.clone());
        Ok(removed)
    }

    /// Every place `item` is recorded. A consistent placement returns
    /// exactly one entry for every item in the world.
    pub fn locations_of(&self, item: &str) -> Vec<Location> {
        let mut found: Vec<Location> = self
            .rooms
            .iter()
            .filter(|(_, items)| items.contains(item))
            .map(|(room, _)| Location::Room(room.clone()))
            .collect();
        if self.inventory.contains(item) {
            found.push(Location::Inventory);
        }
        found
    }

    /// Every item that exists anywhere right now: all room contents plus
    /// the inventory, deduplicated by identity.
    pub fn all_items(&self) -> BTreeSet<ItemId> {
        self.rooms
            .values()
            .flatten()
            .chain(self.inventory.ids())
            .cloned()
            .collect()
    }
}

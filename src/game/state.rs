//! The loaded world and the mutable game state built on top of it.

use std::collections::{BTreeMap, BTreeSet};

use log::info;

use super::catalog::{Item, ItemCatalog};
use super::errors::WorldError;
use super::placement::ItemPlacement;
use super::types::{ItemId, Mass, RoomId};
use super::world::{Room, WorldGraph};

/// Room the player starts in and must return to.
pub const DEFAULT_START_ROOM_ID: &str = "Reception";

/// Static world data: graph, catalog and where each item starts.
///
/// Built once at startup and shared read-only by every game component.
#[derive(Debug, Clone)]
pub struct World {
    graph: WorldGraph,
    catalog: ItemCatalog,
    start_room: RoomId,
}

impl World {
    /// Validate and assemble a world.
    ///
    /// Fails if an exit points nowhere, an id repeats, the start room is
    /// missing, or an item is not in exactly one room.
    pub fn new(rooms: Vec<Room>, items: Vec<Item>, start_room: &str) -> Result<Self, WorldError> {
        let graph = WorldGraph::new(rooms)?;
        let catalog = ItemCatalog::new(items)?;

        if !graph.contains(start_room) {
            return Err(WorldError::UnknownStartRoom(RoomId::new(start_room)));
        }

        let mut placed: BTreeMap<&ItemId, &RoomId> = BTreeMap::new();
        for room in graph.rooms() {
            for item in &room.initial_items {
                if !catalog.contains(item.as_str()) {
                    return Err(WorldError::UnknownItem {
                        room: room.id.clone(),
                        item: item.clone(),
                    });
                }
                if let Some(first) = placed.insert(item, &room.id) {
                    return Err(WorldError::ItemPlacedTwice {
                        item: item.clone(),
                        first: first.clone(),
                        second: room.id.clone(),
                    });
                }
            }
        }
        if let Some(missing) = catalog.ids().find(|id| !placed.contains_key(id)) {
            return Err(WorldError::UnplacedItem(missing.clone()));
        }

        info!(
            "World loaded: {} rooms, {} items, start room {}",
            graph.len(),
            catalog.len(),
            start_room
        );
        Ok(Self {
            graph,
            catalog,
            start_room: RoomId::new(start_room),
        })
    }

    pub fn graph(&self) -> &WorldGraph {
        &self.graph
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn start_room(&self) -> &RoomId {
        &self.start_room
    }

    /// Per-room item sets as they are when a game begins.
    pub fn initial_placement(&self) -> BTreeMap<RoomId, BTreeSet<ItemId>> {
        self.graph
            .rooms()
            .map(|room| (room.id.clone(), room.initial_items.clone()))
            .collect()
    }

    /// Total mass of every item in the world.
    pub fn total_item_mass(&self) -> Mass {
        self.catalog.items().map(|item| item.mass).sum()
    }
}

/// Current room plus item placement: the only mutable state in a game.
///
/// Mutated exclusively by [`execute_command`](super::commands::execute_command).
#[derive(Debug, Clone)]
pub struct GameState<'w> {
    world: &'w World,
    current_room: &'w Room,
    placement: ItemPlacement,
}

impl<'w> GameState<'w> {
    /// Fresh game: player in the start room with an empty inventory.
    pub fn new(world: &'w World, capacity: Mass) -> Result<Self, WorldError> {
        let current_room = world
            .graph
            .room(world.start_room.as_str())
            .ok_or_else(|| WorldError::UnknownStartRoom(world.start_room.clone()))?;
        Ok(Self {
            world,
            current_room,
            placement: ItemPlacement::new(world.initial_placement(), capacity),
        })
    }

    pub fn world(&self) -> &'w World {
        self.world
    }

    pub fn current_room(&self) -> &'w Room {
        self.current_room
    }

    pub fn current_room_id(&self) -> &'w RoomId {
        &self.current_room.id
    }

    pub fn is_in_start_room(&self) -> bool {
        self.current_room.id == self.world.start_room
    }

    /// Items lying in the current room, in id order.
    pub fn items_here(&self) -> Vec<&'w Item> {
        let catalog = &self.world.catalog;
        self.placement
            .items_in(self.current_room.id.as_str())
            .filter_map(|id| catalog.get(id.as_str()))
            .collect()
    }

    /// Items the player carries, in id order.
    pub fn inventory_items(&self) -> Vec<&'w Item> {
        let catalog = &self.world.catalog;
        self.placement
            .inventory()
            .ids()
            .iter()
            .filter_map(|id| catalog.get(id.as_str()))
            .collect()
    }

    pub fn inventory_mass(&self) -> Mass {
        self.placement.inventory().total_mass(&self.world.catalog)
    }

    pub fn capacity(&self) -> Mass {
        self.placement.inventory().capacity()
    }

    pub fn placement(&self) -> &ItemPlacement {
        &self.placement
    }

    pub(crate) fn placement_mut(&mut self) -> &mut ItemPlacement {
        &mut self.placement
    }

    pub(crate) fn enter(&mut self, room: &'w Room) {
        self.current_room = room;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kg(value: f64) -> Mass {
        Mass::from_kg(value).unwrap()
    }

    fn rooms() -> Vec<Room> {
        vec![
            Room::new("Hall", "the hall", "").with_exit("east", "Study").with_item("pen"),
            Room::new("Study", "the study", "").with_exit("west", "Hall"),
        ]
    }

    #[test]
    fn new_game_starts_in_start_room() {
        let world = World::new(rooms(), vec![Item::new("pen", "a pen", kg(0.1))], "Hall").unwrap();
        let state = GameState::new(&world, kg(3.0)).unwrap();
        assert_eq!(state.current_room_id().as_str(), "Hall");
        assert!(state.is_in_start_room());
        assert_eq!(state.items_here().len(), 1);
        assert!(state.inventory_items().is_empty());
        assert_eq!(state.inventory_mass(), Mass::ZERO);
        assert_eq!(state.capacity(), kg(3.0));
    }

    #[test]
    fn unknown_start_room_is_fatal() {
        let err = World::new(rooms(), vec![Item::new("pen", "a pen", kg(0.1))], "Attic")
            .unwrap_err();
        assert!(matches!(err, WorldError::UnknownStartRoom(id) if id.as_str() == "Attic"));
    }

    #[test]
    fn uncatalogued_item_is_fatal() {
        let err = World::new(rooms(), vec![], "Hall").unwrap_err();
        assert!(matches!(err, WorldError::UnknownItem { .. }));
    }

    #[test]
    fn unplaced_item_is_fatal() {
        let items = vec![
            Item::new("pen", "a pen", kg(0.1)),
            Item::new("ink", "a pot of ink", kg(0.2)),
        ];
        let err = World::new(rooms(), items, "Hall").unwrap_err();
        assert!(matches!(err, WorldError::UnplacedItem(id) if id.as_str() == "ink"));
    }

    #[test]
    fn item_in_two_rooms_is_fatal() {
        let mut rooms = rooms();
        rooms[1] = rooms[1].clone().with_item("pen");
        let err = World::new(rooms, vec![Item::new("pen", "a pen", kg(0.1))], "Hall").unwrap_err();
        assert!(matches!(err, WorldError::ItemPlacedTwice { .. }));
    }
}

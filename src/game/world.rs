//! Static room graph.
//!
//! Rooms are held in an arena keyed by [`RoomId`]; exits store target ids,
//! never references. The graph is checked for closure when it is built, so
//! every exit resolves to a real room for the rest of the process.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use log::debug;

use super::errors::WorldError;
use super::types::{ItemId, RoomId};

/// A node of the world graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    /// Direction name -> neighbouring room. Directed; need not be symmetric.
    pub exits: BTreeMap<String, RoomId>,
    /// Items lying here when a new game starts. Live contents are tracked by
    /// [`ItemPlacement`](super::placement::ItemPlacement).
    pub initial_items: BTreeSet<ItemId>,
}

impl Room {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: RoomId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            exits: BTreeMap::new(),
            initial_items: BTreeSet::new(),
        }
    }

    pub fn with_exit(mut self, direction: &str, destination: &str) -> Self {
        self.exits
            .insert(direction.to_string(), RoomId::new(destination));
        self
    }

    pub fn with_item(mut self, item: &str) -> Self {
        self.initial_items.insert(ItemId::new(item));
        self
    }

    pub fn exit(&self, direction: &str) -> Option<&RoomId> {
        self.exits.get(direction)
    }
}

/// Read-only directed graph of rooms.
#[derive(Debug, Clone)]
pub struct WorldGraph {
    rooms: BTreeMap<RoomId, Room>,
}

impl WorldGraph {
    /// Build the graph, failing on duplicate ids or exits into the void.
    pub fn new(rooms: Vec<Room>) -> Result<Self, WorldError> {
        let mut arena = BTreeMap::new();
        for room in rooms {
            if arena.contains_key(&room.id) {
                return Err(WorldError::DuplicateRoom(room.id));
            }
            arena.insert(room.id.clone(), room);
        }

        for room in arena.values() {
            for (direction, target) in &room.exits {
                if !arena.contains_key(target) {
                    return Err(WorldError::UnknownExitTarget {
                        room: room.id.clone(),
                        direction: direction.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        debug!("World graph validated: {} rooms", arena.len());
        Ok(Self { rooms: arena })
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rooms.contains_key(id)
    }

    pub fn exits(&self, id: &str) -> Option<&BTreeMap<String, RoomId>> {
        self.rooms.get(id).map(|room| &room.exits)
    }

    /// Follow `direction` out of `from`. `None` when either is unknown.
    pub fn resolve_exit(&self, from: &str, direction: &str) -> Option<&Room> {
        let target = self.rooms.get(from)?.exit(direction)?;
        self.rooms.get(target)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Breadth-first set of room ids reachable from `start`, including it.
    pub fn reachable_from(&self, start: &str) -> BTreeSet<RoomId> {
        let mut seen = BTreeSet::new();
        let Some(first) = self.rooms.get(start) else {
            return seen;
        };

        let mut queue = VecDeque::from([&first.id]);
        seen.insert(first.id.clone());
        while let Some(id) = queue.pop_front() {
            let Some(room) = self.rooms.get(id) else {
                continue;
            };
            for target in room.exits.values() {
                if seen.insert(target.clone()) {
                    queue.push_back(target);
                }
            }
        }
        seen
    }
}

//! Load and save worlds as JSON seed files.
//!
//! This lets a world be customised without recompiling. The format is:
//!
//! ```json
//! {
//!   "start_room": "Reception",
//!   "rooms": [
//!     { "id": "Reception", "name": "Reception", "description": "...",
//!       "exits": { "south": "Admins" }, "items": ["biscuits"] }
//!   ],
//!   "items": [ { "id": "biscuits", "name": "a pack of biscuits", "mass": 0.1 } ]
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use super::catalog::Item;
use super::errors::WorldError;
use super::parser::is_command_word;
use super::state::{World, DEFAULT_START_ROOM_ID};
use super::types::{ItemId, Mass, RoomId};
use super::world::Room;

/// Load and validate a world from a JSON seed file.
pub fn load_world_from_json<P: AsRef<Path>>(path: P) -> Result<World, WorldError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let seed: WorldSeed = serde_json::from_str(&contents).map_err(|source| WorldError::Seed {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded world seed from {}", path.display());
    seed.into_world()
}

/// Write `world` as a JSON seed file, in its starting layout.
pub fn save_world_to_json<P: AsRef<Path>>(world: &World, path: P) -> Result<(), WorldError> {
    let path = path.as_ref();
    let seed = WorldSeed::from_world(world);
    let json = serde_json::to_string_pretty(&seed).map_err(|source| WorldError::Seed {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json)?;
    info!("Wrote world seed to {}", path.display());
    Ok(())
}

// ============================================================================
// Seed data structures that match JSON format
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSeed {
    #[serde(default = "default_start_room")]
    pub start_room: String,
    pub rooms: Vec<RoomSeed>,
    #[serde(default)]
    pub items: Vec<ItemSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSeed {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub exits: BTreeMap<String, String>,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSeed {
    pub id: String,
    pub name: String,
    /// Kilograms.
    pub mass: f64,
}

fn default_start_room() -> String {
    DEFAULT_START_ROOM_ID.to_string()
}

fn item_id(raw: &str) -> Result<ItemId, WorldError> {
    let id = raw.to_lowercase();
    if !is_command_word(&id) {
        return Err(WorldError::InvalidItemId(raw.to_string()));
    }
    Ok(ItemId::new(id))
}

impl RoomSeed {
    fn into_room(self) -> Result<Room, WorldError> {
        let id = RoomId::new(self.id);

        let mut exits = BTreeMap::new();
        for (raw, target) in self.exits {
            let direction = raw.to_lowercase();
            if !is_command_word(&direction) {
                return Err(WorldError::InvalidDirection {
                    room: id,
                    direction: raw,
                });
            }
            if exits.insert(direction.clone(), RoomId::new(target)).is_some() {
                return Err(WorldError::DuplicateExit { room: id, direction });
            }
        }

        let initial_items = self
            .items
            .iter()
            .map(|raw| item_id(raw))
            .collect::<Result<BTreeSet<_>, WorldError>>()?;

        Ok(Room {
            id,
            name: self.name,
            description: self.description,
            exits,
            initial_items,
        })
    }
}

impl WorldSeed {
    /// Convert to a validated [`World`].
    ///
    /// Directions and item ids are lowercased, and each must then be a word
    /// the player can type, since input is normalised the same way.
    pub fn into_world(self) -> Result<World, WorldError> {
        let rooms = self
            .rooms
            .into_iter()
            .map(RoomSeed::into_room)
            .collect::<Result<Vec<_>, WorldError>>()?;

        let items = self
            .items
            .into_iter()
            .map(|seed| {
                let id = item_id(&seed.id)?;
                let mass = Mass::from_kg(seed.mass).ok_or_else(|| WorldError::InvalidMass {
                    item: id.clone(),
                    mass: seed.mass,
                })?;
                Ok(Item::new(id.as_str(), &seed.name, mass))
            })
            .collect::<Result<Vec<_>, WorldError>>()?;

        World::new(rooms, items, &self.start_room)
    }

    pub fn from_world(world: &World) -> Self {
        let rooms = world
            .graph()
            .rooms()
            .map(|room| RoomSeed {
                id: room.id.to_string(),
                name: room.name.clone(),
                description: room.description.clone(),
                exits: room
                    .exits
                    .iter()
                    .map(|(direction, target)| (direction.clone(), target.to_string()))
                    .collect(),
                items: room.initial_items.iter().map(ItemId::to_string).collect(),
            })
            .collect();
        let items = world
            .catalog()
            .items()
            .map(|item| ItemSeed {
                id: item.id.to_string(),
                name: item.name.clone(),
                mass: item.mass.kg(),
            })
            .collect();
        Self {
            start_room: world.start_room().to_string(),
            rooms,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_world_from_json("nonexistent.json");
        assert!(matches!(result, Err(WorldError::Io(_))));
    }

    #[test]
    fn test_negative_mass_rejected() {
        let seed: WorldSeed = serde_json::from_str(
            r#"{"rooms":[{"id":"Reception","name":"Reception","items":["rock"]}],
                "items":[{"id":"rock","name":"a rock","mass":-1.0}]}"#,
        )
        .unwrap();
        assert!(matches!(seed.into_world(), Err(WorldError::InvalidMass { .. })));
    }

    #[test]
    fn test_start_room_defaults_to_reception() {
        let seed: WorldSeed =
            serde_json::from_str(r#"{"rooms":[{"id":"Reception","name":"Reception"}]}"#).unwrap();
        let world = seed.into_world().unwrap();
        assert_eq!(world.start_room().as_str(), "Reception");
        assert!(world.catalog().is_empty());
    }

    #[test]
    fn test_exit_directions_are_lowercased() {
        let seed: WorldSeed = serde_json::from_str(
            r#"{"start_room":"A","rooms":[
                {"id":"A","name":"a","exits":{"North":"B"}},
                {"id":"B","name":"b"}]}"#,
        )
        .unwrap();
        let world = seed.into_world().unwrap();
        assert!(world.graph().resolve_exit("A", "north").is_some());
    }

    #[test]
    fn test_item_ids_are_lowercased() {
        let seed: WorldSeed = serde_json::from_str(
            r#"{"rooms":[{"id":"Reception","name":"Reception","items":["Lamp"]}],
                "items":[{"id":"LAMP","name":"a lamp","mass":0.5}]}"#,
        )
        .unwrap();
        let world = seed.into_world().unwrap();
        assert!(world.catalog().contains("lamp"));
        assert!(world.initial_placement()["Reception"].contains("lamp"));
    }
}

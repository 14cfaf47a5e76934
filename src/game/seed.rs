//! Built-in world: the School of Computer Science building.
//!
//! Item masses add up to exactly the default carrying capacity, so a player
//! can win only by carrying everything at once.

use super::catalog::Item;
use super::errors::WorldError;
use super::state::{World, DEFAULT_START_ROOM_ID};
use super::types::Mass;
use super::world::Room;

/// Room ids of the built-in world.
pub const CANONICAL_ROOM_IDS: &[&str] = &["Reception", "Admins", "Tutor", "Parking", "Office"];

pub fn canonical_rooms() -> Vec<Room> {
    vec![
        Room::new(
            "Reception",
            "Reception",
            "You are in a maze of twisty little passages, all alike.\n\
             Next to you is the School of Computer Science and\n\
             Informatics reception. The receptionist, Matt Strangis,\n\
             seems to be playing an old school text-based adventure\n\
             game on his computer. There are corridors leading to the\n\
             south and east. The exit is to the west.",
        )
        .with_exit("south", "Admins")
        .with_exit("east", "Tutor")
        .with_exit("west", "Parking")
        .with_item("biscuits")
        .with_item("handbook"),
        Room::new(
            "Admins",
            "MJ and Simon's room",
            "You are leaning against the door of the systems managers'\n\
             room. Inside you notice Matt \"MJ\" John and Simon Jones. They\n\
             ignore you. To the north is the reception.",
        )
        .with_exit("north", "Reception")
        .with_item("id"),
        Room::new(
            "Tutor",
            "your personal tutor's office",
            "You are in your personal tutor's office. He intently\n\
             stares at his huge monitor, ignoring you completely.\n\
             On the desk you notice a cup of coffee and an empty\n\
             pack of biscuits. The reception is to the west.",
        )
        .with_exit("west", "Reception")
        .with_item("laptop"),
        Room::new(
            "Parking",
            "the parking lot",
            "You are standing in the Queen's Buildings parking lot.\n\
             You can go south to the COMSC reception, or east to the\n\
             general office.",
        )
        .with_exit("east", "Office")
        .with_exit("south", "Reception")
        .with_item("money"),
        Room::new(
            "Office",
            "the general office",
            "You are standing next to the cashier's till at\n\
             30-36 Newport Road. The cashier looks at you with hope\n\
             in their eyes. If you go west you can return to the\n\
             Queen's Buildings.",
        )
        .with_exit("west", "Parking")
        .with_item("pen"),
    ]
}

pub fn canonical_items() -> Vec<Item> {
    vec![
        Item::new("biscuits", "a pack of biscuits", Mass::from_grams(100)),
        Item::new("handbook", "a student handbook", Mass::from_grams(100)),
        Item::new("id", "an id card", Mass::from_grams(200)),
        Item::new("laptop", "a laptop", Mass::from_grams(2400)),
        Item::new("money", "some money", Mass::from_grams(100)),
        Item::new("pen", "a pen", Mass::from_grams(100)),
    ]
}

/// Assemble and validate the built-in world.
pub fn canonical_world() -> Result<World, WorldError> {
    World::new(canonical_rooms(), canonical_items(), DEFAULT_START_ROOM_ID)
}

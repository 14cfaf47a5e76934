use std::path::PathBuf;

use thiserror::Error;

use super::types::{ItemId, RoomId};

/// Fatal problems with the world data. These are only ever raised while a
/// world is being loaded and validated; a constructed [`World`](super::World)
/// cannot produce them.
#[derive(Debug, Error)]
pub enum WorldError {
    /// An exit leads to a room that does not exist.
    #[error("room {room} has exit '{direction}' to unknown room {target}")]
    UnknownExitTarget {
        room: RoomId,
        direction: String,
        target: RoomId,
    },

    /// Two rooms share the same identity.
    #[error("duplicate room id: {0}")]
    DuplicateRoom(RoomId),

    /// Two catalog entries share the same identity.
    #[error("duplicate item id: {0}")]
    DuplicateItem(ItemId),

    /// A room lists an item that is not in the catalog.
    #[error("room {room} holds unknown item {item}")]
    UnknownItem { room: RoomId, item: ItemId },

    /// The same item was placed in more than one room.
    #[error("item {item} placed in both {first} and {second}")]
    ItemPlacedTwice {
        item: ItemId,
        first: RoomId,
        second: RoomId,
    },

    /// A catalog item was not placed anywhere in the world.
    #[error("item {0} is not placed in any room")]
    UnplacedItem(ItemId),

    /// The configured start room is not part of the graph.
    #[error("unknown start room: {0}")]
    UnknownStartRoom(RoomId),

    /// An exit direction a player could never type: a filler word, or
    /// something that is not a single lowercase alphanumeric token.
    #[error("room {room} has exit '{direction}' that cannot be typed as a command")]
    InvalidDirection { room: RoomId, direction: String },

    /// Two exits of one room have the same direction once lowercased.
    #[error("room {room} has more than one exit '{direction}'")]
    DuplicateExit { room: RoomId, direction: String },

    /// An item id a player could never type.
    #[error("item id '{0}' cannot be typed as a command")]
    InvalidItemId(String),

    /// Item masses must be finite and non-negative.
    #[error("item {item} has invalid mass {mass}")]
    InvalidMass { item: ItemId, mass: f64 },

    /// Wrapper around IO errors while reading or writing seed files.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A seed file could not be parsed or serialized.
    #[error("invalid world seed {path}: {source}")]
    Seed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Which command family a missing-argument failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionFamily {
    Go,
    Take,
    Drop,
}

/// Recoverable failures of a single player command.
///
/// The `Display` text is the line shown to the player. None of these leave
/// any trace in the game state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("You cannot go there.")]
    NoSuchExit { direction: String },

    #[error("You cannot take that.")]
    NotInRoom { item: String },

    /// Taking the item would push the inventory past its capacity.
    #[error("You cannot carry that.")]
    TooHeavy { item: ItemId },

    #[error("You cannot drop that.")]
    NotHeld { item: String },

    #[error("{}", missing_argument_prompt(.0))]
    MissingArgument(ActionFamily),

    #[error("This makes no sense.")]
    Unrecognized { verb: String },
}

fn missing_argument_prompt(family: &ActionFamily) -> &'static str {
    match family {
        ActionFamily::Go => "Go where?",
        ActionFamily::Take => "Take what?",
        ActionFamily::Drop => "Drop what?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_messages_match_failure_kind() {
        assert_eq!(
            ActionError::NoSuchExit { direction: "up".into() }.to_string(),
            "You cannot go there."
        );
        assert_eq!(
            ActionError::TooHeavy { item: ItemId::new("laptop") }.to_string(),
            "You cannot carry that."
        );
        assert_eq!(
            ActionError::NotInRoom { item: "laptop".into() }.to_string(),
            "You cannot take that."
        );
        assert_eq!(
            ActionError::MissingArgument(ActionFamily::Drop).to_string(),
            "Drop what?"
        );
        assert_eq!(
            ActionError::Unrecognized { verb: "dance".into() }.to_string(),
            "This makes no sense."
        );
    }

    #[test]
    fn world_errors_name_the_offender() {
        let err = WorldError::UnknownExitTarget {
            room: RoomId::new("Reception"),
            direction: "north".into(),
            target: RoomId::new("Roof"),
        };
        let msg = err.to_string();
        assert!(msg.contains("Reception"));
        assert!(msg.contains("Roof"));
    }
}

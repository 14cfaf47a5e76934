//! Command parsing and execution.
//!
//! A normalised command (lowercase tokens) becomes a [`Command`], and
//! [`execute_command`] applies it to a [`GameState`]. Every failure is an
//! [`ActionError`] carrying the line to show the player; a failed command
//! never changes state.

use log::{debug, info};

use super::errors::{ActionError, ActionFamily};
use super::state::GameState;
use super::types::{ItemId, RoomId};

/// The closed set of player commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank input; does nothing.
    Empty,
    Go(Option<String>),   // go south
    Take(Option<String>), // take pen
    Drop(Option<String>), // drop pen
    /// First token is not a known verb.
    Unknown(String),
}

impl Command {
    /// Build a command from normalised tokens. Only the first argument is
    /// consulted; anything after it is ignored.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let Some(verb) = tokens.first() else {
            return Command::Empty;
        };
        let arg = tokens.get(1).map(|t| t.as_ref().to_string());
        match verb.as_ref() {
            "go" => Command::Go(arg),
            "take" => Command::Take(arg),
            "drop" => Command::Drop(arg),
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// What a successful command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Nothing,
    Moved { from: RoomId, to: RoomId },
    Taken(ItemId),
    Dropped(ItemId),
}

/// Apply `command` to `state`.
pub fn execute_command(state: &mut GameState<'_>, command: &Command) -> Result<Outcome, ActionError> {
    let result = match command {
        Command::Empty => Ok(Outcome::Nothing),
        Command::Go(Some(direction)) => execute_go(state, direction),
        Command::Go(None) => Err(ActionError::MissingArgument(ActionFamily::Go)),
        Command::Take(Some(item)) => execute_take(state, item),
        Command::Take(None) => Err(ActionError::MissingArgument(ActionFamily::Take)),
        Command::Drop(Some(item)) => execute_drop(state, item),
        Command::Drop(None) => Err(ActionError::MissingArgument(ActionFamily::Drop)),
        Command::Unknown(verb) => Err(ActionError::Unrecognized { verb: verb.clone() }),
    };

    if let Err(ref e) = result {
        debug!("Command {:?} refused: {:?}", command, e);
    }
    result
}

/// Move through the exit named `direction`, if the current room has one.
pub fn execute_go(state: &mut GameState<'_>, direction: &str) -> Result<Outcome, ActionError> {
    let from = state.current_room_id();
    let target = state
        .world()
        .graph()
        .resolve_exit(from.as_str(), direction)
        .ok_or_else(|| ActionError::NoSuchExit {
            direction: direction.to_string(),
        })?;

    state.enter(target);
    info!("Moved {} from {} to {}", direction, from, target.id);
    Ok(Outcome::Moved {
        from: from.clone(),
        to: target.id.clone(),
    })
}

/// Pick up `item_id` from the current room.
pub fn execute_take(state: &mut GameState<'_>, item_id: &str) -> Result<Outcome, ActionError> {
    let room = state.current_room_id();
    let catalog = state.world().catalog();
    let taken = state.placement_mut().take_item(room.as_str(), item_id, catalog)?;
    info!("Took {} from {}", taken, room);
    Ok(Outcome::Taken(taken))
}

/// Put `item_id` down in the current room.
pub fn execute_drop(state: &mut GameState<'_>, item_id: &str) -> Result<Outcome, ActionError> {
    let room = state.current_room_id();
    let dropped = state.placement_mut().drop_item(room, item_id)?;
    info!("Dropped {} in {}", dropped, room);
    Ok(Outcome::Dropped(dropped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog::Item;
    use crate::game::state::World;
    use crate::game::types::Mass;
    use crate::game::world::Room;

    fn world() -> World {
        let rooms = vec![
            Room::new("Hall", "the hall", "")
                .with_exit("east", "Study")
                .with_item("pen"),
            Room::new("Study", "the study", "").with_exit("west", "Hall"),
        ];
        let items = vec![Item::new("pen", "a pen", Mass::from_grams(100))];
        World::new(rooms, items, "Hall").unwrap()
    }

    #[test]
    fn parses_verbs_and_first_argument() {
        assert_eq!(Command::from_tokens::<&str>(&[]), Command::Empty);
        assert_eq!(Command::from_tokens(&["go", "east"]), Command::Go(Some("east".into())));
        assert_eq!(Command::from_tokens(&["take"]), Command::Take(None));
        assert_eq!(
            Command::from_tokens(&["drop", "pen", "now", "please"]),
            Command::Drop(Some("pen".into()))
        );
        assert_eq!(Command::from_tokens(&["dance"]), Command::Unknown("dance".into()));
    }

    #[test]
    fn go_follows_exit() {
        let world = world();
        let mut state = GameState::new(&world, Mass::from_grams(3000)).unwrap();
        let outcome = execute_command(&mut state, &Command::Go(Some("east".into()))).unwrap();
        assert_eq!(
            outcome,
            Outcome::Moved {
                from: RoomId::new("Hall"),
                to: RoomId::new("Study")
            }
        );
        assert_eq!(state.current_room_id().as_str(), "Study");
    }

    #[test]
    fn go_nowhere_keeps_room() {
        let world = world();
        let mut state = GameState::new(&world, Mass::from_grams(3000)).unwrap();
        let err = execute_command(&mut state, &Command::Go(Some("up".into()))).unwrap_err();
        assert_eq!(err.to_string(), "You cannot go there.");
        assert_eq!(state.current_room_id().as_str(), "Hall");
    }

    #[test]
    fn missing_arguments_prompt_per_family() {
        let world = world();
        let mut state = GameState::new(&world, Mass::from_grams(3000)).unwrap();
        let prompts: Vec<String> = [Command::Go(None), Command::Take(None), Command::Drop(None)]
            .iter()
            .map(|c| execute_command(&mut state, c).unwrap_err().to_string())
            .collect();
        assert_eq!(prompts, ["Go where?", "Take what?", "Drop what?"]);
        assert_eq!(state.items_here().len(), 1);
    }

    #[test]
    fn unknown_verb_and_empty_input() {
        let world = world();
        let mut state = GameState::new(&world, Mass::from_grams(3000)).unwrap();
        let err = execute_command(&mut state, &Command::Unknown("xyzzy".into())).unwrap_err();
        assert_eq!(err.to_string(), "This makes no sense.");
        assert_eq!(execute_command(&mut state, &Command::Empty), Ok(Outcome::Nothing));
    }

    #[test]
    fn take_then_drop_elsewhere() {
        let world = world();
        let mut state = GameState::new(&world, Mass::from_grams(3000)).unwrap();
        execute_take(&mut state, "pen").unwrap();
        execute_go(&mut state, "east").unwrap();
        execute_drop(&mut state, "pen").unwrap();
        assert_eq!(state.items_here()[0].id.as_str(), "pen");
        assert!(state.inventory_items().is_empty());
    }

    #[test]
    fn drop_unheld_reports_cannot_drop() {
        let world = world();
        let mut state = GameState::new(&world, Mass::from_grams(3000)).unwrap();
        let err = execute_drop(&mut state, "pen").unwrap_err();
        assert_eq!(err.to_string(), "You cannot drop that.");
    }
}

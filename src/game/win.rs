//! Win condition: back in the start room carrying every item in the world.

use std::collections::BTreeSet;

use super::state::GameState;
use super::types::ItemId;

/// Every item identity that currently exists anywhere, gathered fresh from
/// every room and the inventory.
pub fn all_world_items(state: &GameState<'_>) -> BTreeSet<ItemId> {
    state.placement().all_items()
}

/// True iff the player stands in the start room and holds exactly the set of
/// items that exist in the world. Recomputed on every call.
pub fn check_win_condition(state: &GameState<'_>) -> bool {
    if !state.is_in_start_room() {
        return false;
    }
    state.placement().inventory().ids() == &all_world_items(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog::Item;
    use crate::game::commands::{execute_go, execute_take};
    use crate::game::state::World;
    use crate::game::types::Mass;
    use crate::game::world::Room;

    fn world() -> World {
        let rooms = vec![
            Room::new("Home", "home", "")
                .with_exit("out", "Yard")
                .with_item("key"),
            Room::new("Yard", "the yard", "")
                .with_exit("in", "Home")
                .with_item("ball"),
        ];
        let items = vec![
            Item::new("key", "a key", Mass::from_grams(50)),
            Item::new("ball", "a ball", Mass::from_grams(400)),
        ];
        World::new(rooms, items, "Home").unwrap()
    }

    #[test]
    fn not_won_at_start() {
        let world = world();
        let state = GameState::new(&world, Mass::from_grams(3000)).unwrap();
        assert!(!check_win_condition(&state));
    }

    #[test]
    fn holding_everything_away_from_home_is_not_a_win() {
        let world = world();
        let mut state = GameState::new(&world, Mass::from_grams(3000)).unwrap();
        execute_take(&mut state, "key").unwrap();
        execute_go(&mut state, "out").unwrap();
        execute_take(&mut state, "ball").unwrap();
        assert_eq!(state.inventory_items().len(), 2);
        assert!(!check_win_condition(&state));

        execute_go(&mut state, "in").unwrap();
        assert!(check_win_condition(&state));
    }

    #[test]
    fn missing_one_item_at_home_is_not_a_win() {
        let world = world();
        let mut state = GameState::new(&world, Mass::from_grams(3000)).unwrap();
        execute_take(&mut state, "key").unwrap();
        assert!(state.is_in_start_room());
        assert!(!check_win_condition(&state));
    }

    #[test]
    fn universe_is_stable_across_moves() {
        let world = world();
        let mut state = GameState::new(&world, Mass::from_grams(3000)).unwrap();
        let before = all_world_items(&state);
        execute_take(&mut state, "key").unwrap();
        assert_eq!(all_world_items(&state), before);
    }

    #[test]
    fn itemless_world_is_won_immediately() {
        let rooms = vec![Room::new("Home", "home", "")];
        let world = World::new(rooms, vec![], "Home").unwrap();
        let state = GameState::new(&world, Mass::from_grams(3000)).unwrap();
        assert!(check_win_condition(&state));
    }
}

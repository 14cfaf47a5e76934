//! Text rendering of rooms, inventory and the action menu.
//!
//! Everything here is read-only over [`GameState`]; functions return lines
//! and leave writing them to a [`Presenter`](super::controller::Presenter).

use super::catalog::Item;
use super::state::GameState;
use super::world::Room;

/// Comma-separated item names, e.g. `"a pen, a student handbook"`.
pub fn list_of_items(items: &[&Item]) -> String {
    items
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// "There is ... here." followed by a blank line, or nothing.
pub fn room_items_lines(items: &[&Item]) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }
    vec![format!("There is {} here.", list_of_items(items)), String::new()]
}

/// Room name in capitals framed by blank lines, its description, then its
/// items.
pub fn room_lines(room: &Room, items: &[&Item]) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        room.name.to_uppercase(),
        String::new(),
    ];
    lines.extend(room.description.lines().map(str::to_string));
    lines.push(String::new());
    lines.extend(room_items_lines(items));
    lines
}

pub fn inventory_lines(items: &[&Item]) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }
    vec![format!("You have {}.", list_of_items(items)), String::new()]
}

pub fn mass_line(state: &GameState<'_>) -> String {
    format!(
        "Inventory mass: {} / {}",
        state.inventory_mass(),
        state.capacity()
    )
}

/// "GO <DIRECTION> to <room name>." / "TAKE ..." / "DROP ..." entries.
pub fn menu_lines(state: &GameState<'_>) -> Vec<String> {
    let graph = state.world().graph();
    let mut lines = vec!["You can:".to_string()];

    for (direction, target) in &state.current_room().exits {
        let leads_to = graph
            .room(target.as_str())
            .map(|room| room.name.as_str())
            .unwrap_or(target.as_str());
        lines.push(format!("GO {} to {}.", direction.to_uppercase(), leads_to));
    }
    for item in state.items_here() {
        lines.push(format!(
            "TAKE {} to take {}.",
            item.id.as_str().to_uppercase(),
            item.name
        ));
    }
    for item in state.inventory_items() {
        lines.push(format!(
            "DROP {} to drop {}.",
            item.id.as_str().to_uppercase(),
            item.name
        ));
    }

    lines.push("What do you want to do?".to_string());
    lines
}

/// Full turn snapshot: room, inventory, optional mass line and menu.
pub fn status_lines(state: &GameState<'_>, show_mass: bool) -> Vec<String> {
    let mut lines = room_lines(state.current_room(), &state.items_here());
    lines.extend(inventory_lines(&state.inventory_items()));
    if show_mass {
        lines.push(mass_line(state));
        lines.push(String::new());
    }
    lines.extend(menu_lines(state));
    lines
}

pub fn win_lines(state: &GameState<'_>) -> Vec<String> {
    let rule = "=".repeat(50);
    vec![
        String::new(),
        rule.clone(),
        "CONGRATULATIONS! YOU HAVE WON THE GAME!".to_string(),
        format!(
            "You collected all items and returned to {}.",
            state.current_room().name
        ),
        rule,
    ]
}

//! Game state machine: room graph, item catalog, inventory, command
//! interpreter and win condition, plus the loaders and I/O seams that drive
//! them.

pub mod catalog;
pub mod commands;
pub mod controller;
pub mod errors;
pub mod inventory;
pub mod parser;
pub mod placement;
pub mod render;
pub mod seed;
pub mod seed_loader;
pub mod state;
pub mod types;
pub mod win;
pub mod world;

pub use catalog::{Item, ItemCatalog};
pub use commands::{execute_command, execute_drop, execute_go, execute_take, Command, Outcome};
pub use controller::{
    CommandSource, Game, GameEnd, LineSource, Presenter, RecordingPresenter, ScriptedSource,
    WriterPresenter,
};
pub use errors::{ActionError, ActionFamily, WorldError};
pub use inventory::{calculate_total_mass, within_capacity, Inventory, MAX_INVENTORY_MASS_KG};
pub use parser::normalise_input;
pub use placement::{ItemPlacement, Location};
pub use seed::{canonical_world, CANONICAL_ROOM_IDS};
pub use seed_loader::{load_world_from_json, save_world_to_json, WorldSeed};
pub use state::{GameState, World, DEFAULT_START_ROOM_ID};
pub use types::{ItemId, Mass, RoomId};
pub use win::{all_world_items, check_win_condition};
pub use world::{Room, WorldGraph};

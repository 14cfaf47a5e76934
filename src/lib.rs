//! # Campusquest - a text adventure in the School of Computer Science
//!
//! The player walks between rooms through named exits, picks items up into an
//! inventory capped by total mass, and wins by carrying every item in the
//! world back to Reception.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use campusquest::game::{canonical_world, Game, GameState, LineSource, Mass, WriterPresenter};
//!
//! fn main() -> anyhow::Result<()> {
//!     let world = canonical_world()?;
//!     let state = GameState::new(&world, Mass::from_grams(3000))?;
//!     let stdin = std::io::stdin();
//!     let mut source = LineSource::new(stdin.lock(), std::io::stdout());
//!     let mut presenter = WriterPresenter::new(std::io::stdout());
//!     Game::new(state).run(&mut source, &mut presenter)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - world graph, items, inventory, commands, win condition and the game loop
//! - [`config`] - TOML configuration
//! - [`logutil`] - log sanitising helpers
//!
//! ```text
//! ┌─────────────────┐
//! │   Game loop     │ ← reads commands, renders turns
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   Commands      │ ← go / take / drop
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │ World + Items   │ ← immutable graph, live placement
//! └─────────────────┘
//! ```

pub mod config;
pub mod game;
pub mod logutil;

//! World model for the adventure: zones linked by exits, the things lying in
//! them, the player's carried state and the parsed command value.
//!
//! Everything here is synchronous and single-owner. A dispatcher holds the
//! [`World`] and the [`Player`] for one session and calls into them once per
//! turn; the world never calls back out.

pub mod command;
pub mod entities;
pub mod errors;
pub mod exit;
pub mod graph;
pub mod player;
pub mod seed_loader;
pub mod types;
pub mod zone;

pub use command::Command;
pub use entities::{Container, Npc, Puzzle, Registry};
pub use errors::WorldError;
pub use exit::{Exit, ZoneId};
pub use graph::{DanglingExit, World, WorldProblem};
pub use player::Player;
pub use seed_loader::{load_world_from_json, world_from_json_str};
pub use types::{
    direction_label, is_known_direction, opposite_direction, Item, Named, DEFAULT_CAPACITY,
};
pub use zone::Zone;

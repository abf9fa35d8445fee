//! # advworld - world engine for a turn-based text adventure
//!
//! The crate models the map and the player of a single-player adventure:
//!
//! - **Zones** connected by directed **exits** that may be locked behind a
//!   named key, hidden until revealed, or one-way.
//! - Items, containers, NPCs and puzzles stored in each zone and looked up
//!   by case-insensitive name.
//! - A **player** with a weight-limited inventory, the list of zones already
//!   visited and free-text notes.
//! - The [`world::Command`] value produced by a command parser.
//!
//! ## Quick Start
//!
//! ```rust
//! use advworld::world::{Item, Player, World, Zone};
//!
//! let mut world = World::new();
//! let cave = world.add_zone(Zone::new("Cave", "Une cave sombre")).unwrap();
//! let hall = world.add_zone(Zone::new("Hall", "Un grand hall")).unwrap();
//! world.link(cave, "N", hall).unwrap();
//!
//! let mut player = Player::new();
//! assert!(player.add_item(Item::new("Torche", "Une torche", 2)));
//! assert_eq!(world.destination(cave, "N"), Some(hall));
//! assert_eq!(world.zone(hall).unwrap().exit_string(), "Sorties: sud");
//! ```
//!
//! ## Module Organization
//!
//! - [`world`] - zones, exits, player, commands and seed loading
//! - [`config`] - TOML configuration for the `advworld` tool

pub mod config;
pub mod world;

//! Seed data loader for data-driven world construction
//!
//! Worlds are described in JSON (see `data/seeds/world.json`) so maps can be
//! edited without recompiling. Loading happens in two passes: every zone is
//! registered first, then exits are wired by destination name.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::world::entities::{Container, Npc, Puzzle};
use crate::world::errors::WorldError;
use crate::world::exit::Exit;
use crate::world::graph::World;
use crate::world::types::Item;
use crate::world::zone::Zone;

/// Load a world from a JSON seed file.
pub fn load_world_from_json<P: AsRef<Path>>(path: P) -> Result<World, WorldError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let world = world_from_json_str(&contents)?;
    info!("Loaded {} zones from {}", world.len(), path.display());
    Ok(world)
}

/// Build a world from JSON text.
pub fn world_from_json_str(contents: &str) -> Result<World, WorldError> {
    let seeds: Vec<ZoneSeed> = serde_json::from_str(contents)?;
    build_world(seeds)
}

fn build_world(seeds: Vec<ZoneSeed>) -> Result<World, WorldError> {
    let mut world = World::new();
    let mut pending = Vec::with_capacity(seeds.len());

    for seed in seeds {
        if seed.name.trim().is_empty() {
            return Err(WorldError::InvalidSeed("zone without a name".to_string()));
        }

        let mut zone = Zone::new(&seed.name, &seed.description);
        for item in seed.items {
            zone.add_item(item);
        }
        for container in seed.containers {
            zone.add_container(container);
        }
        for npc in seed.npcs {
            zone.add_npc(npc);
        }
        for puzzle in seed.puzzles {
            zone.add_puzzle(puzzle);
        }

        let id = world.add_zone(zone)?;
        pending.push((id, seed.name, seed.exits));
    }

    for (id, zone_name, exits) in pending {
        for exit in exits {
            if exit.direction.trim().is_empty() {
                return Err(WorldError::InvalidSeed(format!(
                    "exit without direction in {}",
                    zone_name
                )));
            }
            let destination = world
                .find(&exit.to)
                .ok_or_else(|| WorldError::UnknownZone(exit.to.clone()))?;

            if exit.locked && exit.key.is_none() {
                warn!(
                    "Exit {} of {} is locked without a key; only a script can open it",
                    exit.direction, zone_name
                );
            }

            let edge = Exit::custom(
                destination,
                exit.locked,
                exit.key.as_deref(),
                exit.visible,
                exit.one_way,
            );
            if let Some(zone) = world.zone_mut(id) {
                zone.put_exit(&exit.direction, edge);
            }
        }
    }

    Ok(world)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ZoneSeed {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    exits: Vec<ExitSeed>,
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default)]
    containers: Vec<Container>,
    #[serde(default)]
    npcs: Vec<Npc>,
    #[serde(default)]
    puzzles: Vec<Puzzle>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ExitSeed {
    direction: String,
    to: String,
    #[serde(default)]
    locked: bool,
    #[serde(default)]
    key: Option<String>,
    #[serde(default = "default_visible")]
    visible: bool,
    #[serde(default)]
    one_way: bool,
}

fn default_visible() -> bool {
    true
}

//! A location in the world graph.
//!
//! A zone owns its exits and everything lying around in it. It only refers to
//! neighbouring zones through the [`ZoneId`] stored on each exit.

use log::{debug, warn};
use std::collections::BTreeMap;

use super::entities::{Container, Npc, Puzzle, Registry};
use super::exit::{Exit, ZoneId};
use super::types::{direction_label, is_known_direction, Item, EXITS_PREFIX, NO_EXITS_LABEL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    name: String,
    description: String,
    exits: BTreeMap<String, Exit>,
    items: Registry<Item>,
    containers: Registry<Container>,
    npcs: Registry<Npc>,
    puzzles: Registry<Puzzle>,
}

impl Zone {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            exits: BTreeMap::new(),
            items: Registry::new(),
            containers: Registry::new(),
            npcs: Registry::new(),
            puzzles: Registry::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    // ------------------------------------------------------------------
    // Exits
    // ------------------------------------------------------------------

    /// Register `exit` under `direction`, replacing whatever was there.
    pub fn put_exit(&mut self, direction: &str, exit: Exit) {
        if !is_known_direction(direction) {
            warn!("Zone {}: exit key '{}' has no display name", self.name, direction);
        }
        if self.exits.insert(direction.to_string(), exit).is_some() {
            debug!("Zone {}: replaced exit {}", self.name, direction);
        }
    }

    pub fn set_exit(&mut self, direction: &str, neighbor: ZoneId) {
        self.put_exit(direction, Exit::new(neighbor));
    }

    pub fn set_special_exit(
        &mut self,
        direction: &str,
        neighbor: ZoneId,
        locked: bool,
        key_name: Option<&str>,
        visible: bool,
    ) {
        self.put_exit(direction, Exit::special(neighbor, locked, key_name, visible));
    }

    pub fn set_one_way_exit(&mut self, direction: &str, neighbor: ZoneId) {
        self.put_exit(direction, Exit::one_way(neighbor));
    }

    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        self.exits.get(direction)
    }

    pub fn exit_mut(&mut self, direction: &str) -> Option<&mut Exit> {
        self.exits.get_mut(direction)
    }

    /// Exits ordered by direction key.
    pub fn exits(&self) -> impl Iterator<Item = (&str, &Exit)> {
        self.exits.iter().map(|(dir, exit)| (dir.as_str(), exit))
    }

    pub fn exit_directions(&self) -> Vec<String> {
        self.exits.keys().cloned().collect()
    }

    /// Returns false when there is no exit in that direction.
    pub fn unlock_exit(&mut self, direction: &str, key: Option<&Item>) -> bool {
        let Some(exit) = self.exits.get_mut(direction) else {
            return false;
        };
        let was_locked = exit.is_locked();
        let opened = exit.unlock(key);
        if was_locked && opened {
            debug!("Zone {}: exit {} unlocked", self.name, direction);
        }
        opened
    }

    pub fn reveal_exit(&mut self, direction: &str) {
        if let Some(exit) = self.exits.get_mut(direction) {
            if !exit.is_visible() {
                debug!("Zone {}: exit {} revealed", self.name, direction);
            }
            exit.set_visible(true);
        }
    }

    /// `Sorties: ` followed by the display names of the visible exits, or
    /// `Sorties: aucune` when none is visible.
    ///
    /// Labels are separated by single spaces with no trailing space, so
    /// `"Sorties: nord sud"` rather than the older `"Sorties: nord sud "`.
    /// Callers comparing against the older rendering should trim it.
    pub fn exit_string(&self) -> String {
        let labels: Vec<&str> = self
            .exits
            .iter()
            .filter(|(_, exit)| exit.is_visible())
            .map(|(dir, _)| direction_label(dir))
            .collect();

        if labels.is_empty() {
            format!("{}{}", EXITS_PREFIX, NO_EXITS_LABEL)
        } else {
            format!("{}{}", EXITS_PREFIX, labels.join(" "))
        }
    }

    // ------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------

    pub fn add_item(&mut self, item: Item) {
        self.items.add(item);
    }

    pub fn get_item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        self.items.remove(name)
    }

    pub fn items(&self) -> Vec<Item> {
        self.items.to_vec()
    }

    pub fn items_string(&self) -> String {
        self.items.names()
    }

    // ------------------------------------------------------------------
    // Containers, NPCs, puzzles
    // ------------------------------------------------------------------

    pub fn add_container(&mut self, container: Container) {
        self.containers.add(container);
    }

    pub fn get_container(&self, name: &str) -> Option<&Container> {
        self.containers.get(name)
    }

    pub fn get_container_mut(&mut self, name: &str) -> Option<&mut Container> {
        self.containers.get_mut(name)
    }

    pub fn containers(&self) -> Vec<Container> {
        self.containers.to_vec()
    }

    pub fn containers_string(&self) -> String {
        self.containers.names()
    }

    pub fn add_npc(&mut self, npc: Npc) {
        self.npcs.add(npc);
    }

    pub fn get_npc(&self, name: &str) -> Option<&Npc> {
        self.npcs.get(name)
    }

    pub fn get_npc_mut(&mut self, name: &str) -> Option<&mut Npc> {
        self.npcs.get_mut(name)
    }

    pub fn npcs(&self) -> Vec<Npc> {
        self.npcs.to_vec()
    }

    pub fn npcs_string(&self) -> String {
        self.npcs.names()
    }

    pub fn add_puzzle(&mut self, puzzle: Puzzle) {
        self.puzzles.add(puzzle);
    }

    pub fn get_puzzle(&self, name: &str) -> Option<&Puzzle> {
        self.puzzles.get(name)
    }

    pub fn get_puzzle_mut(&mut self, name: &str) -> Option<&mut Puzzle> {
        self.puzzles.get_mut(name)
    }

    pub fn puzzles(&self) -> Vec<Puzzle> {
        self.puzzles.to_vec()
    }

    pub fn puzzles_string(&self) -> String {
        self.puzzles.names()
    }
}

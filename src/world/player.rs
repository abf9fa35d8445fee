//! Player session state: weight-limited inventory, visited zones and notes.

use log::debug;
use std::fmt::Write;

use super::types::{Item, Named, DEFAULT_CAPACITY, EMPTY_INVENTORY_TEXT, EMPTY_NOTES_TEXT};

/// One per game session.
///
/// `current_weight` always equals the summed weight of `inventory` and never
/// exceeds `capacity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    inventory: Vec<Item>,
    current_weight: u32,
    capacity: u32,
    visited_zones: Vec<String>,
    notes: Vec<String>,
}

impl Default for Player {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            inventory: Vec::new(),
            current_weight: 0,
            capacity,
            visited_zones: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn current_weight(&self) -> u32 {
        self.current_weight
    }

    /// Carry `item` if it fits. Returns false, leaving the player untouched,
    /// when the total would go over capacity.
    pub fn add_item(&mut self, item: Item) -> bool {
        let Some(new_weight) = self
            .current_weight
            .checked_add(item.weight())
            .filter(|w| *w <= self.capacity)
        else {
            debug!(
                "Item {} rejected: {}+{} exceeds {}",
                item.name(),
                self.current_weight,
                item.weight(),
                self.capacity
            );
            return false;
        };

        debug!("Item {} added ({}/{})", item.name(), new_weight, self.capacity);
        self.current_weight = new_weight;
        self.inventory.push(item);
        true
    }

    /// Drop the first item called `name` (ignoring case) and hand it back.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let index = self.inventory.iter().position(|i| i.is_named(name))?;
        let item = self.inventory.remove(index);
        self.current_weight -= item.weight();
        debug!(
            "Item {} removed ({}/{})",
            item.name(),
            self.current_weight,
            self.capacity
        );
        Some(item)
    }

    pub fn get_item(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|i| i.is_named(name))
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.get_item(name).is_some()
    }

    /// Owned copy of what the player carries.
    pub fn inventory(&self) -> Vec<Item> {
        self.inventory.clone()
    }

    pub fn inventory_string(&self) -> String {
        if self.inventory.is_empty() {
            return EMPTY_INVENTORY_TEXT.to_string();
        }

        let mut out = format!(
            "Inventaire ({}/{} poids):\n",
            self.current_weight, self.capacity
        );
        for item in &self.inventory {
            let _ = writeln!(out, "- {}", item);
        }
        out
    }

    pub fn visit_zone(&mut self, zone_name: &str) {
        if !self.has_visited_zone(zone_name) {
            debug!("First visit to zone {}", zone_name);
            self.visited_zones.push(zone_name.to_string());
        }
    }

    pub fn has_visited_zone(&self, zone_name: &str) -> bool {
        self.visited_zones.iter().any(|z| z == zone_name)
    }

    /// Zone names in order of first visit.
    pub fn visited_zones(&self) -> &[String] {
        &self.visited_zones
    }

    pub fn add_note(&mut self, note: &str) {
        if !self.notes.iter().any(|n| n == note) {
            debug!("Note recorded ({} total)", self.notes.len() + 1);
            self.notes.push(note.to_string());
        }
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn notes_string(&self) -> String {
        if self.notes.is_empty() {
            return EMPTY_NOTES_TEXT.to_string();
        }

        let mut out = String::from("Vos notes:\n");
        for note in &self.notes {
            let _ = writeln!(out, "- {}", note);
        }
        out
    }
}

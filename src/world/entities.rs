//! Named entities that live inside a zone, and the registry that stores them.
//!
//! Containers, NPCs and puzzles are plain data here. What they do when a
//! player interacts with them is decided by the command dispatcher, which
//! reaches them through [`Registry::get`] / [`Registry::get_mut`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::types::{Item, Named};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Container {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Container {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }
}

impl Named for Container {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Non-player character
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Npc {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub dialogue: HashMap<String, String>, // topic -> response text
}

impl Npc {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            dialogue: HashMap::new(),
        }
    }

    pub fn with_dialogue(mut self, topic: &str, text: &str) -> Self {
        self.dialogue.insert(topic.to_string(), text.to_string());
        self
    }
}

impl Named for Npc {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Puzzle {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub solved: bool,
}

impl Puzzle {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            solved: false,
        }
    }
}

impl Named for Puzzle {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered, name-keyed collection.
///
/// Lookups are case-insensitive exact matches and always return the first
/// entry with that name. Callers get read access through borrows or an owned
/// copy via [`Registry::to_vec`]; only the registry's own methods mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry<T> {
    entries: Vec<T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Named + Clone> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: T) {
        self.entries.push(entry);
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.iter().find(|e| e.is_named(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entries.iter_mut().find(|e| e.is_named(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove and return the first entry called `name`.
    pub fn remove(&mut self, name: &str) -> Option<T> {
        let index = self.entries.iter().position(|e| e.is_named(name))?;
        Some(self.entries.remove(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Owned snapshot of the entries.
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.clone()
    }

    /// Names joined with ", " in insertion order; empty string when empty.
    pub fn names(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

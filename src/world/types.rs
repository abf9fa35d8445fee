use serde::{Deserialize, Serialize};
use std::fmt;

/// Inventory capacity used when no other value is configured.
pub const DEFAULT_CAPACITY: u32 = 10;

/// Rendered when a zone has no visible exit.
pub const NO_EXITS_LABEL: &str = "aucune";
/// Prefix of every exit listing.
pub const EXITS_PREFIX: &str = "Sorties: ";
pub const EMPTY_INVENTORY_TEXT: &str = "Votre inventaire est vide.";
pub const EMPTY_NOTES_TEXT: &str = "Vous n'avez pas encore de notes.";

/// Anything that can be looked up by name inside a zone or an inventory.
pub trait Named {
    fn name(&self) -> &str;

    /// Case-insensitive exact match. No partial or fuzzy matching.
    fn is_named(&self, name: &str) -> bool {
        self.name().to_lowercase() == name.to_lowercase()
    }
}

/// A portable object. Immutable once built; ownership moves between a
/// zone, a container and the player's inventory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    name: String,
    description: String,
    #[serde(default)]
    weight: u32,
}

impl Item {
    pub fn new(name: &str, description: &str, weight: u32) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            weight,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }
}

impl Named for Item {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.description)
    }
}

/// Display name of a direction key. Keys outside the vocabulary are echoed.
pub fn direction_label(direction: &str) -> &str {
    match direction {
        "N" => "nord",
        "S" => "sud",
        "E" => "est",
        "O" => "ouest",
        "H" | "UP" => "haut",
        "B" | "DOWN" => "bas",
        other => other,
    }
}

/// Whether `direction` has a display name.
pub fn is_known_direction(direction: &str) -> bool {
    matches!(direction, "N" | "S" | "E" | "O" | "H" | "UP" | "B" | "DOWN")
}

/// The key for travelling back the way one came, if the vocabulary has one.
pub fn opposite_direction(direction: &str) -> Option<&'static str> {
    match direction {
        "N" => Some("S"),
        "S" => Some("N"),
        "E" => Some("O"),
        "O" => Some("E"),
        "H" => Some("B"),
        "B" => Some("H"),
        "UP" => Some("DOWN"),
        "DOWN" => Some("UP"),
        _ => None,
    }
}

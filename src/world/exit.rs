use super::types::{Item, Named};

/// Stable handle to a zone stored in a [`World`](super::graph::World).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneId(pub usize);

/// A directed edge out of a zone.
///
/// `one_way` is fixed at construction. Lock and visibility change over the
/// course of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    destination: ZoneId,
    locked: bool,
    key_name: Option<String>,
    visible: bool,
    one_way: bool,
}

impl Exit {
    /// Unlocked, visible, two-way.
    pub fn new(destination: ZoneId) -> Self {
        Self {
            destination,
            locked: false,
            key_name: None,
            visible: true,
            one_way: false,
        }
    }

    pub fn special(
        destination: ZoneId,
        locked: bool,
        key_name: Option<&str>,
        visible: bool,
    ) -> Self {
        Self {
            destination,
            locked,
            key_name: key_name.map(str::to_string),
            visible,
            one_way: false,
        }
    }

    pub fn one_way(destination: ZoneId) -> Self {
        Self {
            one_way: true,
            ..Self::new(destination)
        }
    }

    /// Fully specified exit.
    pub fn custom(
        destination: ZoneId,
        locked: bool,
        key_name: Option<&str>,
        visible: bool,
        one_way: bool,
    ) -> Self {
        Self {
            one_way,
            ..Self::special(destination, locked, key_name, visible)
        }
    }

    pub fn destination(&self) -> ZoneId {
        self.destination
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_one_way(&self) -> bool {
        self.one_way
    }

    pub fn key_name(&self) -> Option<&str> {
        self.key_name.as_deref()
    }

    /// Try to open the exit with `key`.
    ///
    /// Always succeeds on an exit that is already unlocked. A locked exit
    /// opens only for a key whose name matches `key_name` ignoring case; an
    /// exit without a key name never opens this way. The key is not consumed.
    pub fn unlock(&mut self, key: Option<&Item>) -> bool {
        if !self.locked {
            return true;
        }

        let matches = match (key, self.key_name.as_deref()) {
            (Some(key), Some(required)) => key.is_named(required),
            _ => false,
        };
        if matches {
            self.locked = false;
        }
        matches
    }

    /// Direct override, bypassing key checks.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

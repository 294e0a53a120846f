use std::fmt;

/// Name of the only item that opens or closes doors.
pub const KEY_ITEM_NAME: &str = "key";

/// Stable index of a location inside the [`World`](super::World) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub(crate) usize);

impl LocationId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An item that can sit in a location or an inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    description: String,
}

impl Item {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// "name: description", the text shown by EXAMINE.
    pub fn examine_line(&self) -> String {
        format!("{}: {}", self.name, self.description)
    }
}

/// One-way, lockable connection to another location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Door {
    pub target: LocationId,
    pub locked: bool,
}

impl Door {
    pub fn new(target: LocationId, locked: bool) -> Self {
        Self { target, locked }
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examine_line() {
        let item = Item::new("gold", "just some gold, sitting around");
        assert_eq!(item.examine_line(), "gold: just some gold, sitting around");
    }

    #[test]
    fn test_door_lock_toggle() {
        let mut door = Door::new(LocationId(3), true);
        door.unlock();
        assert!(!door.locked);
        door.lock();
        assert!(door.locked);
        assert_eq!(door.target, LocationId(3));
    }
}

//! Ordered item container shared by locations, the player and NPCs.

use super::types::Item;

// ============================================================================
// Inventory
// ============================================================================

/// Items keyed by name, kept in insertion order.
///
/// Names are unique within one inventory. Inserting an item whose name is
/// already present replaces the old item in its existing slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }

    /// Insert an item, returning the item it replaced (if any).
    pub fn insert(&mut self, item: Item) -> Option<Item> {
        match self.position(item.name()) {
            Some(index) => Some(std::mem::replace(&mut self.items[index], item)),
            None => {
                self.items.push(item);
                None
            }
        }
    }

    /// Remove and return the named item.
    pub fn remove(&mut self, name: &str) -> Option<Item> {
        self.position(name).map(|index| self.items.remove(index))
    }

    /// Remove and return the oldest item.
    pub fn take_first(&mut self) -> Option<Item> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn first(&self) -> Option<&Item> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(Item::name).collect()
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        let mut inventory = Inventory::new();
        for item in iter {
            inventory.insert(item);
        }
        inventory
    }
}

/// Compact one-line listing, e.g. `Inventory: bagel key`.
pub fn format_inventory_line(inventory: &Inventory) -> String {
    if inventory.is_empty() {
        "Inventory: (empty)".to_string()
    } else {
        format!("Inventory: {}", inventory.names().join(" "))
    }
}

//! Player and resident NPCs.

use super::inventory::{format_inventory_line, Inventory};
use super::types::{Item, LocationId, KEY_ITEM_NAME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    current: LocationId,
    inventory: Inventory,
}

impl Player {
    pub fn new(start: LocationId) -> Self {
        Self {
            current: start,
            inventory: Inventory::new(),
        }
    }

    pub fn current_location(&self) -> LocationId {
        self.current
    }

    pub fn set_location(&mut self, location: LocationId) {
        self.current = location;
    }

    /// Last write wins: an item with the same name is replaced.
    pub fn add_item(&mut self, item: Item) {
        self.inventory.insert(item);
    }

    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        self.inventory.remove(name)
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.contains(name)
    }

    /// Any item literally named "key" opens every door.
    pub fn has_key(&self) -> bool {
        self.has_item(KEY_ITEM_NAME)
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.inventory.get(name)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_summary(&self) -> String {
        format_inventory_line(&self.inventory)
    }
}

/// Non-player character bound to a single location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Npc {
    name: String,
    description: String,
    inventory: Inventory,
}

impl Npc {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            inventory: Inventory::new(),
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.add_item(item);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn add_item(&mut self, item: Item) {
        self.inventory.insert(item);
    }

    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        self.inventory.remove(name)
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.contains(name)
    }

    /// The item this NPC currently offers in a trade.
    pub fn offered_item(&self) -> Option<&Item> {
        self.inventory.first()
    }

    pub(crate) fn take_offered_item(&mut self) -> Option<Item> {
        self.inventory.take_first()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_key_requires_exact_name() {
        let mut player = Player::new(LocationId(0));
        assert!(!player.has_key());
        player.add_item(Item::new("keycard", "not a key"));
        assert!(!player.has_key());
        player.add_item(Item::new("key", "a sweet key"));
        assert!(player.has_key());
    }

    #[test]
    fn test_player_add_overwrites() {
        let mut player = Player::new(LocationId(0));
        player.add_item(Item::new("bagel", "half"));
        player.add_item(Item::new("bagel", "whole"));
        assert_eq!(player.inventory().len(), 1);
        assert_eq!(player.item("bagel").unwrap().description(), "whole");
    }

    #[test]
    fn test_npc_offers_first_item() {
        let mut npc =
            Npc::new("Dwarf", "A helpful Dwarf").with_item(Item::new("key", "a sweet key"));
        assert_eq!(npc.offered_item().unwrap().name(), "key");
        npc.add_item(Item::new("bagel", "half"));
        assert_eq!(npc.take_offered_item().unwrap().name(), "key");
        assert_eq!(npc.offered_item().unwrap().name(), "bagel");
    }
}

//! Locations: the nodes of the room graph.
//!
//! A location only refers to its neighbours by [`LocationId`]; the owning
//! [`World`](super::World) arena resolves those ids.

use std::collections::HashMap;

use super::actor::Npc;
use super::inventory::Inventory;
use super::types::{Door, Item, LocationId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    description: String,
    exits: HashMap<String, LocationId>,
    doors: HashMap<String, Door>,
    items: Inventory,
    npc: Option<Npc>,
}

impl Location {
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            exits: HashMap::new(),
            doors: HashMap::new(),
            items: Inventory::new(),
            npc: None,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Register or overwrite a plain exit.
    pub fn add_exit(&mut self, direction: &str, target: LocationId) {
        self.exits.insert(direction.to_string(), target);
    }

    /// Register or overwrite a door. Plain exits under the same name are left
    /// alone but are shadowed during traversal.
    pub fn add_door(&mut self, direction: &str, target: LocationId, locked: bool) {
        self.doors
            .insert(direction.to_string(), Door::new(target, locked));
    }

    pub fn resolve_exit(&self, direction: &str) -> Option<LocationId> {
        self.exits.get(direction).copied()
    }

    pub fn resolve_door(&self, direction: &str) -> Option<&Door> {
        self.doors.get(direction)
    }

    pub fn resolve_door_mut(&mut self, direction: &str) -> Option<&mut Door> {
        self.doors.get_mut(direction)
    }

    /// Every neighbour reachable through an exit or a door, locked or not.
    pub fn neighbours(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.exits
            .values()
            .copied()
            .chain(self.doors.values().map(|door| door.target))
    }

    pub fn place_item(&mut self, name: &str, description: &str) {
        self.items.insert(Item::new(name, description));
    }

    pub(crate) fn put_item(&mut self, item: Item) {
        self.items.insert(item);
    }

    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        self.items.remove(name)
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.items.contains(name)
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    pub fn items(&self) -> &Inventory {
        &self.items
    }

    /// Bind a resident NPC carrying a single gift item. Replaces any previous
    /// resident.
    pub fn attach_npc(
        &mut self,
        name: &str,
        description: &str,
        gift_name: &str,
        gift_description: &str,
    ) {
        let gift = Item::new(gift_name, gift_description);
        self.npc = Some(Npc::new(name, description).with_item(gift));
    }

    pub fn npc(&self) -> Option<&Npc> {
        self.npc.as_ref()
    }

    pub fn npc_mut(&mut self) -> Option<&mut Npc> {
        self.npc.as_mut()
    }

    /// Full description: where you are, exits, doors, items and any resident.
    ///
    /// Exits and doors are sorted by direction; items keep insertion order.
    pub fn describe_long(&self) -> String {
        let mut out = format!("You are {}.\n", self.description);

        let mut exits: Vec<&str> = self.exits.keys().map(String::as_str).collect();
        exits.sort_unstable();
        if exits.is_empty() {
            out.push_str("Exits: none");
        } else {
            out.push_str("Exits: ");
            out.push_str(&exits.join(" "));
        }

        let mut doors: Vec<(&String, &Door)> = self.doors.iter().collect();
        doors.sort_unstable_by(|a, b| a.0.cmp(b.0));
        if !doors.is_empty() {
            let listed: Vec<String> = doors
                .iter()
                .map(|(dir, door)| {
                    if door.locked {
                        format!("{} (locked)", dir)
                    } else {
                        dir.to_string()
                    }
                })
                .collect();
            out.push_str("\nDoors: ");
            out.push_str(&listed.join(" "));
        }

        if !self.items.is_empty() {
            out.push_str("\nItems: ");
            out.push_str(&self.items.names().join(" "));
        }

        if let Some(npc) = &self.npc {
            out.push_str(&format!("\n{} is here. {}", npc.name(), npc.description()));
        }

        out
    }
}

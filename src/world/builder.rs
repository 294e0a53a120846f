//! Build-time construction of a [`World`].
//!
//! All locations, exits, doors, items and NPCs are declared here before play
//! begins. Locations are named by string ids while building; the finished
//! world addresses them by [`LocationId`].

use log::debug;

use super::actor::Player;
use super::arena::World;
use super::errors::WorldError;
use super::location::Location;
use super::types::{Item, LocationId};

#[derive(Debug, Default)]
pub struct WorldBuilder {
    locations: Vec<Location>,
    ids: Vec<String>,
    start: Option<LocationId>,
    starting_items: Vec<Item>,
}

impl WorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve(&self, id: &str) -> Result<LocationId, WorldError> {
        self.ids
            .iter()
            .position(|known| known == id)
            .map(LocationId)
            .ok_or_else(|| WorldError::UnknownLocation(id.to_string()))
    }

    fn location_mut(&mut self, id: &str) -> Result<&mut Location, WorldError> {
        let index = self.resolve(id)?;
        Ok(&mut self.locations[index.0])
    }

    /// Declare a location. Ids must be unique.
    pub fn location(&mut self, id: &str, description: &str) -> Result<LocationId, WorldError> {
        if self.ids.iter().any(|known| known == id) {
            return Err(WorldError::DuplicateLocation(id.to_string()));
        }
        self.ids.push(id.to_string());
        self.locations.push(Location::new(description));
        Ok(LocationId(self.locations.len() - 1))
    }

    pub fn exit(&mut self, from: &str, direction: &str, to: &str) -> Result<&mut Self, WorldError> {
        let target = self.resolve(to)?;
        self.location_mut(from)?.add_exit(direction, target);
        Ok(self)
    }

    pub fn door(
        &mut self,
        from: &str,
        direction: &str,
        to: &str,
        locked: bool,
    ) -> Result<&mut Self, WorldError> {
        let target = self.resolve(to)?;
        self.location_mut(from)?.add_door(direction, target, locked);
        Ok(self)
    }

    pub fn item(&mut self, at: &str, name: &str, description: &str) -> Result<&mut Self, WorldError> {
        self.location_mut(at)?.place_item(name, description);
        Ok(self)
    }

    pub fn npc(
        &mut self,
        at: &str,
        name: &str,
        description: &str,
        gift_name: &str,
        gift_description: &str,
    ) -> Result<&mut Self, WorldError> {
        self.location_mut(at)?
            .attach_npc(name, description, gift_name, gift_description);
        Ok(self)
    }

    pub fn start(&mut self, at: &str) -> Result<&mut Self, WorldError> {
        self.start = Some(self.resolve(at)?);
        Ok(self)
    }

    pub fn starting_item(&mut self, name: &str, description: &str) -> &mut Self {
        self.starting_items.push(Item::new(name, description));
        self
    }

    pub fn build(self) -> Result<World, WorldError> {
        let start = self.start.ok_or(WorldError::MissingStart)?;
        let mut player = Player::new(start);
        for item in self.starting_items {
            player.add_item(item);
        }
        debug!(
            "World built: {} locations, start={}",
            self.locations.len(),
            self.ids[start.0]
        );
        Ok(World {
            locations: self.locations,
            ids: self.ids,
            start,
            player,
        })
    }
}

//! The world arena: every location plus the player.
//!
//! Locations are stored in one `Vec` and addressed by [`LocationId`]. Ids are
//! only minted by [`WorldBuilder`](super::WorldBuilder) and the topology never
//! changes after `build()`, so indexing by a `LocationId` cannot go out of
//! bounds.

use std::collections::VecDeque;
use std::ops::{Index, IndexMut};

use super::actor::Player;
use super::location::Location;
use super::types::LocationId;

#[derive(Debug, Clone)]
pub struct World {
    pub(crate) locations: Vec<Location>,
    pub(crate) ids: Vec<String>,
    pub(crate) start: LocationId,
    pub(crate) player: Player,
}

impl World {
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn start(&self) -> LocationId {
        self.start
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Look up a location by the id it was declared with.
    pub fn find(&self, id: &str) -> Option<LocationId> {
        self.ids.iter().position(|known| known == id).map(LocationId)
    }

    /// The declared id of a location, e.g. `"outside"`.
    pub fn id_of(&self, location: LocationId) -> &str {
        &self.ids[location.0]
    }

    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[id.0]
    }

    pub fn location_mut(&mut self, id: LocationId) -> &mut Location {
        &mut self.locations[id.0]
    }

    pub fn current_location(&self) -> &Location {
        &self.locations[self.player.current_location().0]
    }

    /// Split borrow: the player together with the location they stand in.
    pub fn player_and_location_mut(&mut self) -> (&mut Player, &mut Location) {
        let here = self.player.current_location().0;
        (&mut self.player, &mut self.locations[here])
    }

    pub fn ids(&self) -> impl Iterator<Item = (LocationId, &str)> {
        self.ids
            .iter()
            .enumerate()
            .map(|(index, id)| (LocationId(index), id.as_str()))
    }

    /// Locations with no path from the start, following exits and doors
    /// regardless of lock state. Returned in declaration order.
    pub fn unreachable_from_start(&self) -> Vec<&str> {
        let mut seen = vec![false; self.locations.len()];
        let mut queue = VecDeque::new();
        seen[self.start.0] = true;
        queue.push_back(self.start);

        while let Some(next) = queue.pop_front() {
            for neighbour in self.locations[next.0].neighbours() {
                if !seen[neighbour.0] {
                    seen[neighbour.0] = true;
                    queue.push_back(neighbour);
                }
            }
        }

        seen.iter()
            .enumerate()
            .filter(|(_, reached)| !**reached)
            .map(|(index, _)| self.ids[index].as_str())
            .collect()
    }
}

impl Index<LocationId> for World {
    type Output = Location;

    fn index(&self, index: LocationId) -> &Self::Output {
        self.location(index)
    }
}

impl IndexMut<LocationId> for World {
    fn index_mut(&mut self, index: LocationId) -> &mut Self::Output {
        self.location_mut(index)
    }
}

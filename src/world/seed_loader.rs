//! Seed data loader for data-driven worlds
//!
//! A world seed is a JSON file (see `data/seeds/campus.json`) describing
//! locations, their exits, doors, items and resident NPCs, plus where the
//! player starts and what they carry. Loading lets a world be customised
//! without recompiling.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::arena::World;
use super::builder::WorldBuilder;
use super::errors::WorldError;

/// Load a world from a JSON seed file.
pub fn load_world_from_json<P: AsRef<Path>>(path: P) -> Result<World, WorldError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let world = world_from_json_str(&contents)?;
    info!(
        "Loaded world seed {} ({} locations)",
        path.display(),
        world.len()
    );
    Ok(world)
}

/// Build a world from seed JSON held in memory.
pub fn world_from_json_str(contents: &str) -> Result<World, WorldError> {
    let seed: WorldSeed = serde_json::from_str(contents)?;
    seed.into_world()
}

// ============================================================================
// Seed data structures that match JSON format
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct WorldSeed {
    start: String,
    #[serde(default)]
    inventory: Vec<ItemSeed>,
    locations: Vec<LocationSeed>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LocationSeed {
    id: String,
    description: String,
    #[serde(default)]
    exits: HashMap<String, String>,
    #[serde(default)]
    doors: HashMap<String, DoorSeed>,
    #[serde(default)]
    items: Vec<ItemSeed>,
    npc: Option<NpcSeed>,
}

#[derive(Debug, Serialize, Deserialize)]
struct DoorSeed {
    to: String,
    #[serde(default)]
    locked: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct ItemSeed {
    name: String,
    description: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct NpcSeed {
    name: String,
    description: String,
    gift: ItemSeed,
}

impl WorldSeed {
    fn into_world(self) -> Result<World, WorldError> {
        let mut builder = WorldBuilder::new();

        // Declare every location first so exits may point forward.
        for loc in &self.locations {
            builder.location(&loc.id, &loc.description)?;
        }

        for loc in &self.locations {
            for (direction, target) in &loc.exits {
                builder.exit(&loc.id, direction, target)?;
            }
            for (direction, door) in &loc.doors {
                builder.door(&loc.id, direction, &door.to, door.locked)?;
            }
            for item in &loc.items {
                builder.item(&loc.id, &item.name, &item.description)?;
            }
            if let Some(npc) = &loc.npc {
                builder.npc(
                    &loc.id,
                    &npc.name,
                    &npc.description,
                    &npc.gift.name,
                    &npc.gift.description,
                )?;
            }
            debug!(
                "Seeded location {}: {} exits, {} doors, {} items",
                loc.id,
                loc.exits.len(),
                loc.doors.len(),
                loc.items.len()
            );
        }

        for item in &self.inventory {
            builder.starting_item(&item.name, &item.description);
        }
        builder.start(&self.start)?;
        builder.build()
    }
}

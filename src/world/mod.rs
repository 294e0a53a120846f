//! World model: locations, doors, items, the player and resident NPCs.
//!
//! The world is assembled once by a [`WorldBuilder`] (directly, from the
//! built-in [`campus_world`], or from a JSON seed) and its topology is fixed
//! from then on. Only item placement, inventories and door locks change during
//! play, and only the engine changes them.

pub mod actor;
pub mod arena;
pub mod builder;
pub mod errors;
pub mod inventory;
pub mod location;
pub mod seed_loader;
pub mod state;
pub mod types;

pub use actor::{Npc, Player};
pub use arena::World;
pub use builder::WorldBuilder;
pub use errors::WorldError;
pub use inventory::{format_inventory_line, Inventory};
pub use location::Location;
pub use seed_loader::{load_world_from_json, world_from_json_str};
pub use state::{campus_world, CAMPUS_LOCATION_IDS, START_LOCATION_ID};
pub use types::{Door, Item, LocationId, KEY_ITEM_NAME};

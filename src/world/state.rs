//! The built-in campus world.

use super::builder::WorldBuilder;
use super::errors::WorldError;
use super::arena::World;

pub const START_LOCATION_ID: &str = "outside";

/// Location ids of the campus world, in declaration order.
pub const CAMPUS_LOCATION_IDS: &[&str] = &["outside", "theatre", "pub", "lab", "office"];

/// Build the campus: five rooms, a locked portal between the entrance and the
/// admin office, three loose items, and a Dwarf at the entrance who has a key.
pub fn campus_world() -> Result<World, WorldError> {
    let mut b = WorldBuilder::new();

    b.location("outside", "outside the main entrance of the university")?;
    b.location("theatre", "in a lecture theatre")?;
    b.location("pub", "in the campus pub")?;
    b.location("lab", "in a computing lab")?;
    b.location("office", "in the computing admin office")?;

    b.exit("outside", "east", "theatre")?
        .exit("outside", "south", "lab")?
        .exit("outside", "dennis", "pub")?
        .door("outside", "portal", "office", true)?;

    b.exit("theatre", "west", "outside")?;
    b.exit("pub", "undennis", "outside")?;
    b.exit("lab", "north", "outside")?.exit("lab", "east", "office")?;
    b.exit("office", "west", "lab")?
        .door("office", "portal", "outside", true)?;

    b.item(
        "outside",
        "flask",
        "pretty spangly. It looks like you've got ye flask",
    )?;
    b.item("theatre", "sandwich", "a delicious sandwich")?;
    b.item("lab", "gold", "just some gold, sitting around")?;

    b.npc("outside", "Dwarf", "A helpful Dwarf", "key", "a sweet key")?;

    b.starting_item("bagel", "half a blueberry bagel");
    b.start(START_LOCATION_ID)?;

    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campus_layout() {
        let world = campus_world().unwrap();
        let ids: Vec<&str> = world.ids().map(|(_, id)| id).collect();
        assert_eq!(ids, CAMPUS_LOCATION_IDS);
        assert_eq!(world.id_of(world.start()), START_LOCATION_ID);
        assert!(world.unreachable_from_start().is_empty());
    }

    #[test]
    fn test_campus_portal_is_locked_both_ways() {
        let world = campus_world().unwrap();
        let outside = world.find("outside").unwrap();
        let office = world.find("office").unwrap();

        let door = world[outside].resolve_door("portal").unwrap();
        assert!(door.locked);
        assert_eq!(door.target, office);
        assert!(world[office].resolve_door("portal").unwrap().locked);
    }

    #[test]
    fn test_campus_dwarf_offers_key() {
        let world = campus_world().unwrap();
        let npc = world.current_location().npc().unwrap();
        assert_eq!(npc.name(), "Dwarf");
        assert_eq!(npc.offered_item().unwrap().name(), "key");
        assert_eq!(world.player().inventory().names(), vec!["bagel"]);
    }
}

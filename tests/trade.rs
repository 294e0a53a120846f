// Integration tests for TRADE with resident NPCs

use zuul::engine::{Command, CommandWord, Game, TurnError};
use zuul::world::{campus_world, Inventory, Item, World, WorldBuilder};

fn trade(item: &str) -> Command {
    Command::with_second(CommandWord::Trade, item)
}

fn dwarf_inventory(game: &Game) -> Inventory {
    let world = game.world();
    let outside = world.find("outside").unwrap();
    world[outside].npc().unwrap().inventory().clone()
}

#[test]
fn test_trade_bagel_for_key() {
    let mut game = Game::new(campus_world().unwrap());
    let reply = game.dispatch(&trade("bagel")).unwrap();

    assert!(reply.text.starts_with("You trade your bagel for Dwarf's key."));
    assert!(reply.text.ends_with("Inventory: key"));
    assert!(game.world().player().has_key());
    assert!(!game.world().player().has_item("bagel"));
    assert_eq!(dwarf_inventory(&game).names(), vec!["bagel"]);
}

#[test]
fn test_failed_trade_changes_nothing() {
    let mut game = Game::new(campus_world().unwrap());
    let player_before = game.world().player().inventory().clone();
    let dwarf_before = dwarf_inventory(&game);

    assert_eq!(
        game.dispatch(&trade("gold")),
        Err(TurnError::NotCarried("gold".into()))
    );

    assert_eq!(game.world().player().inventory(), &player_before);
    assert_eq!(dwarf_inventory(&game), dwarf_before);
    assert!(!game.world().player().has_key());
}

#[test]
fn test_trade_conserves_item_count() {
    let mut game = Game::new(campus_world().unwrap());
    let total = |g: &Game| g.world().player().inventory().len() + dwarf_inventory(g).len();
    let before = total(&game);

    game.dispatch(&trade("bagel")).unwrap();
    assert_eq!(total(&game), before);
    let _ = game.dispatch(&trade("sandwich"));
    assert_eq!(total(&game), before);
}

#[test]
fn test_trade_back_restores_starting_holdings() {
    let mut game = Game::new(campus_world().unwrap());
    game.dispatch(&trade("bagel")).unwrap();
    game.dispatch(&trade("key")).unwrap();

    assert_eq!(game.world().player().inventory().names(), vec!["bagel"]);
    assert_eq!(dwarf_inventory(&game).names(), vec!["key"]);
}

#[test]
fn test_trade_without_npc() {
    let mut game = Game::new(campus_world().unwrap());
    game.dispatch(&Command::with_second(CommandWord::Go, "east"))
        .unwrap();
    assert_eq!(game.dispatch(&trade("bagel")), Err(TurnError::NoNpc));
    assert!(game.world().player().has_item("bagel"));
}

#[test]
fn test_npc_gift_is_fixed_regardless_of_name() {
    let mut game = Game::new(campus_world().unwrap());
    game.dispatch(&Command::with_second(CommandWord::Take, "flask"))
        .unwrap();
    // Naming the flask still buys the key
    game.dispatch(&trade("flask")).unwrap();
    assert!(game.world().player().has_key());
    assert!(game.world().player().has_item("bagel"));
    assert_eq!(dwarf_inventory(&game).names(), vec!["flask"]);
}

#[test]
fn test_trade_with_empty_handed_npc() {
    let mut game = Game::new(campus_world().unwrap());
    let outside = game.world().find("outside").unwrap();
    game.world_mut()[outside]
        .npc_mut()
        .unwrap()
        .remove_item("key")
        .unwrap();
    let player_before = game.world().player().inventory().clone();

    assert_eq!(
        game.dispatch(&trade("bagel")),
        Err(TurnError::NothingToTrade("Dwarf".into()))
    );
    assert_eq!(game.world().player().inventory(), &player_before);
    assert!(dwarf_inventory(&game).is_empty());
}

/// Two rooms that each hold a `gold`, with the Dwarf offering a bagel in `a`.
fn twin_gold_world() -> World {
    let mut builder = WorldBuilder::new();
    builder.location("a", "in room a").unwrap();
    builder.location("b", "in room b").unwrap();
    builder
        .exit("a", "b", "b")
        .unwrap()
        .exit("b", "a", "a")
        .unwrap()
        .item("a", "gold", "a gold coin")
        .unwrap()
        .item("b", "gold", "another gold coin")
        .unwrap()
        .npc("a", "Dwarf", "A helpful Dwarf", "bagel", "half a blueberry bagel")
        .unwrap()
        .start("a")
        .unwrap()
        .starting_item("key", "a sweet key");
    builder.build().unwrap()
}

#[test]
fn test_trade_refuses_gift_already_carried() {
    let mut game = Game::new(twin_gold_world());
    for line in ["take gold", "trade gold", "go b", "take gold", "go a"] {
        game.process_line(line);
    }
    let npc_inventory = |g: &Game| {
        let a = g.world().find("a").unwrap();
        g.world()[a].npc().unwrap().inventory().clone()
    };
    let player_before = game.world().player().inventory().clone();
    let npc_before = npc_inventory(&game);
    assert_eq!(player_before.names(), vec!["key", "bagel", "gold"]);
    assert_eq!(npc_before.names(), vec!["gold"]);

    assert_eq!(
        game.dispatch(&trade("key")),
        Err(TurnError::AlreadyCarrying("gold".into()))
    );
    assert_eq!(game.world().player().inventory(), &player_before);
    assert_eq!(npc_inventory(&game), npc_before);
}

#[test]
fn test_trade_refuses_payment_npc_already_holds() {
    let mut game = Game::new(twin_gold_world());
    game.process_line("take gold");
    let a = game.world().find("a").unwrap();
    game.world_mut()[a]
        .npc_mut()
        .unwrap()
        .add_item(Item::new("gold", "the Dwarf's own gold"));

    let reply = game.process_line("trade gold");
    assert_eq!(reply.text, "Dwarf already has a gold!");
    assert_eq!(game.world().player().inventory().names(), vec!["key", "gold"]);
    assert_eq!(
        game.world()[a].npc().unwrap().inventory().names(),
        vec!["bagel", "gold"]
    );
}

#[test]
fn test_trade_goes_through_once_clash_is_cleared() {
    let mut game = Game::new(twin_gold_world());
    game.process_line("take gold");
    game.process_line("trade gold");
    // Carrying a second gold blocks the Dwarf's offer until one is dropped
    game.process_line("go b");
    game.process_line("take gold");
    game.process_line("go a");
    assert_eq!(
        game.dispatch(&trade("bagel")),
        Err(TurnError::AlreadyCarrying("gold".into()))
    );
    game.process_line("drop gold");
    let reply = game.dispatch(&trade("bagel")).unwrap();
    assert!(reply.text.starts_with("You trade your bagel for Dwarf's gold."));
    assert_eq!(game.world().player().inventory().names(), vec!["key", "gold"]);
}

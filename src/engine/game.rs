//! Command resolution against the world.
//!
//! [`Game::dispatch`] is the single entry point that mutates world state. Each
//! handler either succeeds with a [`Reply`] or fails with a [`TurnError`];
//! a failed turn never leaves a partial change behind.

use log::{debug, info};

use crate::logutil::{command_for_log, escape_log};
use crate::world::World;

use super::command::{Command, CommandWord};
use super::errors::TurnError;
use super::parser::Parser;

pub const DEFAULT_GAME_NAME: &str = "World of Zuul";
pub const FAREWELL: &str = "Thank you for playing.  Goodbye.";

/// Text produced by a successful turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// Set only by a bare `quit`.
    pub finished: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            finished: false,
        }
    }

    fn quit() -> Self {
        Self {
            text: FAREWELL.to_string(),
            finished: true,
        }
    }
}

pub type TurnResult = Result<Reply, TurnError>;

#[derive(Debug)]
pub struct Game {
    world: World,
    parser: Parser,
    name: String,
}

impl Game {
    pub fn new(world: World) -> Self {
        Self {
            world,
            parser: Parser::new(),
            name: DEFAULT_GAME_NAME.to_string(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct world access for setup code and tests.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    /// Opening banner followed by the starting location and inventory.
    pub fn welcome(&self) -> String {
        format!(
            "\nWelcome to the {name}!\n{name} is a new, incredibly boring adventure game.\nType 'help' if you need help.\n\n{}",
            self.location_report(),
            name = self.name
        )
    }

    /// Parse a raw line and run it. Failures are turned into their message.
    pub fn process_line(&mut self, line: &str) -> Reply {
        let command = self.parser.parse_line(line);
        match self.dispatch(&command) {
            Ok(reply) => reply,
            Err(e) => Reply::text(e.to_string()),
        }
    }

    /// Run one command against the world.
    pub fn dispatch(&mut self, command: &Command) -> TurnResult {
        debug!("Dispatch: {}", command_for_log(command));
        let (word, second) = match command {
            Command::Word { word, second } => (*word, second.as_deref()),
            Command::Unknown => return Err(TurnError::UnknownCommand),
        };

        match word {
            CommandWord::Help => Ok(self.help()),
            CommandWord::Go => self.go(required(word, second)?),
            CommandWord::Drop => self.drop_item(required(word, second)?),
            CommandWord::Take => self.take_item(required(word, second)?),
            CommandWord::Trade => self.trade(required(word, second)?),
            CommandWord::Examine => self.examine(required(word, second)?),
            CommandWord::Lock => self.set_lock(required(word, second)?, true),
            CommandWord::Unlock => self.set_lock(required(word, second)?, false),
            CommandWord::Quit => match second {
                Some(_) => Err(TurnError::InvalidQuit),
                None => Ok(Reply::quit()),
            },
        }
    }

    fn location_report(&self) -> String {
        format!(
            "{}\n{}",
            self.world.current_location().describe_long(),
            self.world.player().inventory_summary()
        )
    }

    fn help(&self) -> Reply {
        Reply::text(format!(
            "You are lost. You are alone. You wander\naround at the university.\n\nYour command words are:\n   {}",
            self.parser.command_list()
        ))
    }

    /// A door shadows a plain exit under the same direction.
    fn go(&mut self, direction: &str) -> TurnResult {
        let here = self.world.current_location();
        let target = match here.resolve_door(direction) {
            Some(door) if door.locked => return Err(TurnError::Blocked),
            Some(door) => door.target,
            None => here.resolve_exit(direction).ok_or(TurnError::NoExit)?,
        };

        let from = self.world.player().current_location();
        self.world.player_mut().set_location(target);
        info!(
            "Moved {} -> {} via {}",
            self.world.id_of(from),
            self.world.id_of(target),
            escape_log(direction)
        );
        Ok(Reply::text(self.location_report()))
    }

    fn take_item(&mut self, name: &str) -> TurnResult {
        let (player, location) = self.world.player_and_location_mut();
        let item = location
            .remove_item(name)
            .ok_or_else(|| TurnError::NoSuchItem(name.to_string()))?;
        player.add_item(item);
        info!("Took {}", escape_log(name));
        Ok(Reply::text(self.location_report()))
    }

    fn drop_item(&mut self, name: &str) -> TurnResult {
        let (player, location) = self.world.player_and_location_mut();
        let item = player
            .remove_item(name)
            .ok_or_else(|| TurnError::NotCarried(name.to_string()))?;
        location.put_item(item);
        info!("Dropped {}", escape_log(name));
        Ok(Reply::text(self.location_report()))
    }

    /// Swap `name` for the resident's offered item. Both sides are checked
    /// before anything moves, including name clashes that would let an
    /// insert overwrite an item.
    fn trade(&mut self, name: &str) -> TurnResult {
        let (player, location) = self.world.player_and_location_mut();
        let npc = location.npc_mut().ok_or(TurnError::NoNpc)?;
        let gift_name = match npc.offered_item() {
            Some(gift) => gift.name().to_string(),
            None => return Err(TurnError::NothingToTrade(npc.name().to_string())),
        };
        if !player.has_item(name) {
            return Err(TurnError::NotCarried(name.to_string()));
        }
        if gift_name != name {
            if player.has_item(&gift_name) {
                return Err(TurnError::AlreadyCarrying(gift_name));
            }
            if npc.has_item(name) {
                return Err(TurnError::NpcAlreadyHas(
                    npc.name().to_string(),
                    name.to_string(),
                ));
            }
        }

        // Both takes were verified above
        let (Some(payment), Some(gift)) = (player.remove_item(name), npc.take_offered_item())
        else {
            return Err(TurnError::NotCarried(name.to_string()));
        };

        let text = format!(
            "You trade your {} for {}'s {}.",
            payment.name(),
            npc.name(),
            gift.name()
        );
        info!(
            "Traded {} to {} for {}",
            escape_log(payment.name()),
            npc.name(),
            gift.name()
        );
        npc.add_item(payment);
        player.add_item(gift);

        Ok(Reply::text(format!(
            "{}\n{}",
            text,
            self.world.player().inventory_summary()
        )))
    }

    /// Carried items first, then items lying in the current location.
    fn examine(&self, name: &str) -> TurnResult {
        self.world
            .player()
            .item(name)
            .or_else(|| self.world.current_location().item(name))
            .map(|item| Reply::text(item.examine_line()))
            .ok_or_else(|| TurnError::NoSuchItem(name.to_string()))
    }

    fn set_lock(&mut self, direction: &str, locked: bool) -> TurnResult {
        if !self.world.player().has_key() {
            return Err(TurnError::NoKey);
        }
        let here = self.world.player().current_location();
        let door = self.world[here]
            .resolve_door_mut(direction)
            .ok_or_else(|| TurnError::NoSuchDoor(direction.to_string()))?;
        if locked {
            door.lock();
        } else {
            door.unlock();
        }
        info!(
            "Door {} in {} {}",
            escape_log(direction),
            self.world.id_of(here),
            if locked { "locked" } else { "unlocked" }
        );
        Ok(Reply::text(if locked {
            "Door locked"
        } else {
            "Door unlocked"
        }))
    }
}

fn required(word: CommandWord, second: Option<&str>) -> Result<&str, TurnError> {
    second.ok_or(TurnError::MissingArgument(word))
}

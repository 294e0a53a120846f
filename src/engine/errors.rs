use thiserror::Error;

use super::command::CommandWord;

/// Why a turn failed. Every variant leaves the world exactly as it was, and the
/// `Display` text is what the player sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The door in that direction is locked.
    #[error("The door is locked!")]
    Blocked,

    /// Neither a door nor an exit is registered for that direction.
    #[error("There is no exit!")]
    NoExit,

    /// Lock/unlock attempted without an item named "key".
    #[error("You don't have a key!")]
    NoKey,

    /// Lock/unlock named a direction with no door.
    #[error("There is no door {0}!")]
    NoSuchDoor(String),

    /// Nothing by that name here (take, examine).
    #[error("There is no {0} here!")]
    NoSuchItem(String),

    /// The player does not carry that item (drop, trade).
    #[error("You aren't carrying {0}!")]
    NotCarried(String),

    /// Trade attempted in a location with no resident.
    #[error("There is nobody here to trade with!")]
    NoNpc,

    /// The resident has nothing left to give.
    #[error("{0} has nothing to trade.")]
    NothingToTrade(String),

    /// Trading would hand the player a second item under a name they carry.
    #[error("You already have a {0}!")]
    AlreadyCarrying(String),

    /// Trading would hand the resident a second item under a name it holds.
    #[error("{0} already has a {1}!")]
    NpcAlreadyHas(String, String),

    /// The command needs a second word.
    #[error("{}", missing_argument_prompt(.0))]
    MissingArgument(CommandWord),

    #[error("I don't know what you mean...")]
    UnknownCommand,

    /// `quit` followed by another word.
    #[error("Quit what?")]
    InvalidQuit,
}

fn missing_argument_prompt(word: &CommandWord) -> &'static str {
    match word {
        CommandWord::Go => "Go where?",
        CommandWord::Drop => "Drop what?",
        CommandWord::Take => "Take what?",
        CommandWord::Trade => "Trade what?",
        CommandWord::Examine => "Examine what?",
        CommandWord::Lock => "Lock what?",
        CommandWord::Unlock => "Unlock what?",
        CommandWord::Help | CommandWord::Quit => "What?",
    }
}

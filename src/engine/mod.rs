//! Command engine: parsing, dispatch and turn outcomes.
//!
//! The flow for one turn is `Parser::parse_line` → [`Command`] →
//! [`Game::dispatch`] → [`Reply`] or [`TurnError`].

pub mod command;
pub mod errors;
pub mod game;
pub mod parser;

pub use command::{Command, CommandWord};
pub use errors::TurnError;
pub use game::{Game, Reply, TurnResult, DEFAULT_GAME_NAME, FAREWELL};
pub use parser::Parser;

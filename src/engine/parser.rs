//! Raw input line → [`Command`].
//!
//! The first whitespace-separated token is the command word and the second
//! (if any) is the second word. Anything after that is ignored.

use super::command::{Command, CommandWord};

#[derive(Debug, Default, Clone, Copy)]
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_line(&self, line: &str) -> Command {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            return Command::Unknown;
        };
        match CommandWord::from_word(first) {
            Some(word) => Command::Word {
                word,
                second: tokens.next().map(str::to_string),
            },
            None => Command::Unknown,
        }
    }

    /// Space-separated list of every command word.
    pub fn command_list(&self) -> String {
        CommandWord::ALL
            .iter()
            .map(|word| word.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

//! Structured commands consumed by the engine.

use std::fmt;

/// The closed set of command words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandWord {
    Help,
    Go,
    Drop,
    Take,
    Trade,
    Examine,
    Lock,
    Unlock,
    Quit,
}

impl CommandWord {
    /// Every command word, in the order HELP lists them.
    pub const ALL: [CommandWord; 9] = [
        CommandWord::Go,
        CommandWord::Quit,
        CommandWord::Help,
        CommandWord::Take,
        CommandWord::Drop,
        CommandWord::Trade,
        CommandWord::Examine,
        CommandWord::Lock,
        CommandWord::Unlock,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CommandWord::Help => "help",
            CommandWord::Go => "go",
            CommandWord::Drop => "drop",
            CommandWord::Take => "take",
            CommandWord::Trade => "trade",
            CommandWord::Examine => "examine",
            CommandWord::Lock => "lock",
            CommandWord::Unlock => "unlock",
            CommandWord::Quit => "quit",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_word(word: &str) -> Option<CommandWord> {
        CommandWord::ALL.into_iter().find(|cw| cw.as_str() == word)
    }
}

impl fmt::Display for CommandWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tokenized instruction: a known command word with an optional second word,
/// or `Unknown` for anything the parser did not recognise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Word {
        word: CommandWord,
        second: Option<String>,
    },
    Unknown,
}

impl Command {
    pub fn new(word: CommandWord) -> Self {
        Command::Word { word, second: None }
    }

    pub fn with_second(word: CommandWord, second: &str) -> Self {
        Command::Word {
            word,
            second: Some(second.to_string()),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Command::Unknown)
    }

    pub fn word(&self) -> Option<CommandWord> {
        match self {
            Command::Word { word, .. } => Some(*word),
            Command::Unknown => None,
        }
    }

    pub fn second_word(&self) -> Option<&str> {
        match self {
            Command::Word { second, .. } => second.as_deref(),
            Command::Unknown => None,
        }
    }

    pub fn has_second_word(&self) -> bool {
        self.second_word().is_some()
    }
}

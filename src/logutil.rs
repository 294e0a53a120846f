//! Logging helpers for player-supplied text.
//!
//! Command arguments come straight from the input line, so they are escaped
//! before reaching the log to keep every record on one line.

use crate::engine::Command;

/// Longest argument preview written to the log.
const MAX_PREVIEW: usize = 64;

/// Escape a player-supplied word for single-line logging:
/// - `\n`, `\r`, `\t` and `\\` become their escaped forms
/// - other control characters become `\xNN`
///
/// Anything past [`MAX_PREVIEW`] characters is cut and replaced by `…`.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

/// One-line rendering of a parsed command, e.g. `trade "bagel"` or `<unknown>`.
///
/// The second word is quoted so an empty or odd-looking argument stays visible.
pub fn command_for_log(command: &Command) -> String {
    match (command.word(), command.second_word()) {
        (None, _) => "<unknown>".to_string(),
        (Some(word), None) => word.to_string(),
        (Some(word), Some(second)) => format!("{} \"{}\"", word, escape_log(second)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CommandWord;

    #[test]
    fn plain_words_pass_through() {
        assert_eq!(escape_log("portal"), "portal");
    }

    #[test]
    fn control_characters_are_escaped() {
        assert_eq!(escape_log("gold\x1b[31m"), "gold\\x1B[31m");
        assert_eq!(escape_log("a\\b\tc"), "a\\\\b\\tc");
    }

    #[test]
    fn long_arguments_are_truncated() {
        let long = "x".repeat(100);
        let esc = escape_log(&long);
        assert_eq!(esc.chars().count(), 65);
        assert!(esc.ends_with('…'));
    }

    #[test]
    fn commands_render_on_one_line() {
        assert_eq!(command_for_log(&Command::Unknown), "<unknown>");
        assert_eq!(command_for_log(&Command::new(CommandWord::Quit)), "quit");
        assert_eq!(
            command_for_log(&Command::with_second(CommandWord::Take, "go\nld")),
            "take \"go\\nld\""
        );
    }
}

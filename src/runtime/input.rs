//! Shell input parsing
//!
//! Turns one line typed by the user (or read from a script) into a
//! [`ShellCommand`]. Item positions are 1-based, as shown on screen.

use std::fmt;

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Replace the title input
    Title(String),
    /// Replace the description input
    Description(String),
    /// Press the action button
    Submit,
    /// Fill both inputs and press the action button
    Add { title: String, description: String },
    /// Edit the item at a position
    Edit(usize),
    /// Delete the item at a position
    Delete(usize),
    /// Toggle the checked mark of the item at a position
    Check(usize),
    /// Drag the item at `from` and drop it at `to`
    Move { from: usize, to: usize },
    /// Print the screen
    List,
    /// Print the render state as JSON
    Json,
    Help,
    Quit,
}

/// Why a shell line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand(String),
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    InvalidPosition(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownCommand(word) => {
                write!(f, "unknown command '{}' (try 'help')", word)
            }
            ParseError::MissingArgument { command, expected } => {
                write!(f, "'{}' expects {}", command, expected)
            }
            ParseError::InvalidPosition(raw) => {
                write!(f, "'{}' is not a list position (positions start at 1)", raw)
            }
        }
    }
}

impl std::error::Error for ParseError {}

pub const HELP: &str = "\
Commands:
  title <text>          set the title input
  desc <text>           set the description input
  submit                add the item, or save the one being edited
  add <title> | <desc>  fill both inputs and submit
  edit <n>              load item n into the inputs
  delete <n>            delete item n
  check <n>             toggle the checked mark of item n
  move <from> <to>      drag item <from> to position <to>
  list                  show the list
  json                  show the screen state as JSON
  help                  show this help
  quit                  leave";

/// Parse one line of shell input
///
/// Blank lines and lines starting with `#` yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };
    // Text arguments keep inner and trailing whitespace; validation decides
    let rest = rest.strip_prefix(' ').unwrap_or(rest);

    let command = match word.to_ascii_lowercase().as_str() {
        "title" | "t" => ShellCommand::Title(rest.to_string()),
        "desc" | "description" | "d" => ShellCommand::Description(rest.to_string()),
        "submit" | "s" => ShellCommand::Submit,
        "add" | "a" => {
            let (title, description) =
                rest.split_once('|').ok_or(ParseError::MissingArgument {
                    command: "add",
                    expected: "<title> | <description>",
                })?;
            // Only the single space padding the separator is dropped
            ShellCommand::Add {
                title: title.strip_suffix(' ').unwrap_or(title).to_string(),
                description: description
                    .strip_prefix(' ')
                    .unwrap_or(description)
                    .to_string(),
            }
        }
        "edit" | "e" => ShellCommand::Edit(position("edit", rest)?),
        "delete" | "del" | "rm" => ShellCommand::Delete(position("delete", rest)?),
        "check" | "x" => ShellCommand::Check(position("check", rest)?),
        "move" | "mv" => {
            let mut parts = rest.split_whitespace();
            let expected = "<from> <to>";
            let from = parts.next().ok_or(ParseError::MissingArgument {
                command: "move",
                expected,
            })?;
            let to = parts.next().ok_or(ParseError::MissingArgument {
                command: "move",
                expected,
            })?;
            ShellCommand::Move {
                from: parse_position(from)?,
                to: parse_position(to)?,
            }
        }
        "list" | "ls" => ShellCommand::List,
        "json" => ShellCommand::Json,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn position(command: &'static str, rest: &str) -> Result<usize, ParseError> {
    let raw = rest.split_whitespace().next().ok_or(ParseError::MissingArgument {
        command,
        expected: "an item position",
    })?;
    parse_position(raw)
}

fn parse_position(raw: &str) -> Result<usize, ParseError> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ParseError::InvalidPosition(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   \n"), Ok(None));
        assert_eq!(parse_line("# a note"), Ok(None));
    }

    #[test]
    fn test_text_inputs_keep_spacing() {
        assert_eq!(
            parse_line("title Buy  milk "),
            Ok(Some(ShellCommand::Title("Buy  milk ".into())))
        );
        assert_eq!(
            parse_line("desc"),
            Ok(Some(ShellCommand::Description(String::new())))
        );
    }

    #[test]
    fn test_add_splits_on_bar() {
        assert_eq!(
            parse_line("add Walk dog | evening"),
            Ok(Some(ShellCommand::Add {
                title: "Walk dog".into(),
                description: "evening".into()
            }))
        );
        assert_eq!(
            parse_line("add a  |  b "),
            Ok(Some(ShellCommand::Add {
                title: "a ".into(),
                description: " b ".into()
            }))
        );
        assert!(matches!(
            parse_line("add Walk dog"),
            Err(ParseError::MissingArgument { command: "add", .. })
        ));
    }

    #[test]
    fn test_positions() {
        assert_eq!(parse_line("edit 2"), Ok(Some(ShellCommand::Edit(2))));
        assert_eq!(parse_line("rm 1"), Ok(Some(ShellCommand::Delete(1))));
        assert_eq!(
            parse_line("move 3 1"),
            Ok(Some(ShellCommand::Move { from: 3, to: 1 }))
        );
        assert_eq!(
            parse_line("delete 0"),
            Err(ParseError::InvalidPosition("0".into()))
        );
        assert_eq!(
            parse_line("edit two"),
            Err(ParseError::InvalidPosition("two".into()))
        );
        assert!(matches!(
            parse_line("move 1"),
            Err(ParseError::MissingArgument { command: "move", .. })
        ));
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_line("frobnicate 3").unwrap_err();
        assert_eq!(err, ParseError::UnknownCommand("frobnicate".into()));
        assert!(err.to_string().contains("help"));
    }
}

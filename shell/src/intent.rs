//! User gestures, parsed from interactive command lines.

use thiserror::Error;
use todo_core::TodoId;

use crate::config::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Create an item with this name.
    Submit(String),
    /// Flip the completion flag of an item.
    Toggle(TodoId),
    Delete(TodoId),
    /// Re-fetch and render.
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),

    #[error("`{0}` needs an item id")]
    MissingId(&'static str),

    #[error("`{0}` is not a valid item id")]
    BadId(String),
}

pub const HELP: &str = "\
commands:
  add <name>     add a new item
  toggle <id>    mark an item done or open
  delete <id>    remove an item (alias: rm)
  list           reload the checklist
  help           show this message
  quit           leave (alias: exit)";

/// Parse one line typed at the prompt. Blank lines yield `None`.
///
/// `add` keeps everything after the keyword as the name, including an
/// empty one: rejecting blank names is the Sync Core's job.
pub fn parse_line(line: &str) -> Result<Option<Intent>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let intent = match word {
        "add" => Intent::Submit(rest.to_string()),
        "toggle" => Intent::Toggle(parse_id("toggle", rest)?),
        "delete" | "rm" => Intent::Delete(parse_id("delete", rest)?),
        "list" | "ls" => Intent::Refresh,
        "help" | "?" => Intent::Help,
        "quit" | "exit" => Intent::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(Some(intent))
}

fn parse_id(command: &'static str, arg: &str) -> Result<TodoId, ParseError> {
    let arg = arg.trim_start_matches('#');
    if arg.is_empty() {
        return Err(ParseError::MissingId(command));
    }
    arg.parse().map_err(|_| ParseError::BadId(arg.to_string()))
}

impl From<Command> for Intent {
    fn from(command: Command) -> Self {
        match command {
            Command::List => Intent::Refresh,
            Command::Add { name } => Intent::Submit(name.join(" ")),
            Command::Toggle { id } => Intent::Toggle(id),
            Command::Delete { id } => Intent::Delete(id),
        }
    }
}

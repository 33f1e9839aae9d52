use clap::{Parser, Subcommand};
use todo_core::TodoId;

#[derive(Debug, Parser)]
#[command(name = "todo")]
#[command(about = "Checklist client for a remote to-do service")]
#[command(version)]
pub struct Cli {
    /// Base URL of the to-do service
    #[arg(long, env = "TODO_API_URL")]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Print the current checklist
    List,
    /// Add a new item
    Add {
        /// Item name; words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Flip an item between open and done
    Toggle { id: TodoId },
    /// Remove an item
    #[command(alias = "rm")]
    Delete { id: TodoId },
}

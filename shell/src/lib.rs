//! Terminal checklist over a remote to-do collection.
//!
//! `App` owns the one rendered `Snapshot` and borrows the `TodoService` it
//! was handed; it never edits the snapshot in place.

pub mod app;
pub mod config;
pub mod intent;
pub mod render;

pub use app::{App, ShellError};
pub use config::{Cli, Command};
pub use intent::{Intent, ParseError};

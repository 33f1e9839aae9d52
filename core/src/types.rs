//! Domain DTOs for the to-do API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Field names follow the wire format (`id`, `name`, `isDone`) through serde
//! renames, so Rust code keeps snake_case. Integration tests catch any schema
//! drift between the two crates.

use serde::{Deserialize, Serialize};

/// Server-assigned identifier. Opaque to the client: it is only ever read
/// from a response and echoed back in a path.
pub type TodoId = u64;

/// A single to-do item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub name: String,
    #[serde(default)]
    pub is_done: bool,
}

/// Request payload for creating a new to-do. The server decides `id` and
/// starts every item as not done.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub name: String,
}

impl CreateTodo {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Request payload for replacing an existing to-do's mutable fields. Both
/// fields are always sent, even when only one of them changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    pub name: String,
    pub is_done: bool,
}

impl UpdateTodo {
    /// Payload that flips `todo`'s completion flag and resends its name.
    pub fn toggled(todo: &Todo) -> Self {
        Self {
            name: todo.name.clone(),
            is_done: !todo.is_done,
        }
    }
}

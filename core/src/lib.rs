//! Client-side synchronization core for a remote to-do collection.
//!
//! # Overview
//! `TodoClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. A `Transport` executes the round trip, and
//! `TodoService` ties the two together into the four remote operations
//! (list, create, update, delete).
//!
//! # Design
//! - Mutate-then-refetch: no operation patches local state. After a
//!   mutation, the caller lists again (or uses
//!   `TodoService::mutate_and_refresh`) and replaces its `Snapshot` wholesale.
//! - Ids are opaque and only ever round-tripped from the server.
//! - `TodoService` is an ordinary value that callers construct and pass
//!   around. There is no global instance.

pub mod client;
pub mod error;
pub mod http;
pub mod service;
pub mod transport;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::{Snapshot, TodoService};
pub use transport::{Transport, UreqTransport};
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};

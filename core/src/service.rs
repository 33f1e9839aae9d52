//! The synchronization contract between a UI and the remote collection.
//!
//! # Design
//! `TodoService` pairs a `TodoClient` with a `Transport`. Every primitive
//! operation performs exactly one round trip and never touches a cached
//! snapshot. Callers observe the effect of a mutation only by listing again,
//! which `mutate_and_refresh` bundles so the refresh step cannot be
//! forgotten.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::transport::{Transport, UreqTransport};
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

/// The full ordered collection last returned by the server.
///
/// There are no mutating methods: a new `Snapshot` replaces the old one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    items: Vec<Todo>,
}

impl Snapshot {
    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn into_items(self) -> Vec<Todo> {
        self.items
    }
}

impl From<Vec<Todo>> for Snapshot {
    fn from(items: Vec<Todo>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Client object for one remote to-do collection.
pub struct TodoService<T = UreqTransport> {
    client: TodoClient,
    transport: T,
}

impl TodoService<UreqTransport> {
    /// Service talking to `base_url` over a fresh ureq agent.
    pub fn connect(base_url: &str) -> Self {
        Self::new(TodoClient::new(base_url), UreqTransport::new())
    }
}

impl<T: Transport> TodoService<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let req = self.client.build_list_todos();
        let todos = self
            .transport
            .execute(req)
            .and_then(|resp| self.client.parse_list_todos(resp))
            .inspect_err(|e| warn!(error = %e, "list failed"))?;
        debug!(count = todos.len(), "listed todos");
        Ok(todos)
    }

    /// `list` wrapped as a `Snapshot`.
    pub fn snapshot(&self) -> Result<Snapshot, ApiError> {
        self.list().map(Snapshot::from)
    }

    /// Fails with `EmptyName`, without any request, if `name` is blank.
    pub fn create(&self, name: &str) -> Result<Todo, ApiError> {
        let req = self.client.build_create_todo(&CreateTodo::new(name))?;
        let todo = self
            .transport
            .execute(req)
            .and_then(|resp| self.client.parse_create_todo(resp))
            .inspect_err(|e| warn!(error = %e, "create failed"))?;
        debug!(id = todo.id, "created todo");
        Ok(todo)
    }

    /// Replaces both mutable fields of item `id`.
    pub fn update(&self, id: TodoId, name: &str, is_done: bool) -> Result<Todo, ApiError> {
        let input = UpdateTodo {
            name: name.to_string(),
            is_done,
        };
        let req = self.client.build_update_todo(id, &input)?;
        let todo = self
            .transport
            .execute(req)
            .and_then(|resp| self.client.parse_update_todo(resp))
            .inspect_err(|e| warn!(id, error = %e, "update failed"))?;
        debug!(id, is_done = todo.is_done, "updated todo");
        Ok(todo)
    }

    pub fn delete(&self, id: TodoId) -> Result<(), ApiError> {
        let req = self.client.build_delete_todo(id);
        self.transport
            .execute(req)
            .and_then(|resp| self.client.parse_delete_todo(resp))
            .inspect_err(|e| warn!(id, error = %e, "delete failed"))?;
        debug!(id, "deleted todo");
        Ok(())
    }

    /// Runs one mutation and, if it succeeded, fetches a fresh snapshot.
    ///
    /// A failed mutation is returned as is and no list request is made.
    pub fn mutate_and_refresh<R>(
        &self,
        mutation: impl FnOnce(&Self) -> Result<R, ApiError>,
    ) -> Result<Snapshot, ApiError> {
        mutation(self)?;
        self.snapshot()
    }
}

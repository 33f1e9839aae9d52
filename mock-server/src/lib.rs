//! In-memory reference backend for the to-do HTTP contract.
//!
//! Ids are handed out sequentially from 1 and never reused; listing returns
//! items in id order, which is also creation order.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub name: String,
    pub is_done: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub name: String,
}

/// Full replacement: both fields are required.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    pub name: String,
    pub is_done: bool,
}

#[derive(Debug, Default)]
pub struct Store {
    last_id: u64,
    todos: BTreeMap<u64, Todo>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    Json(store.todos.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), StatusCode> {
    if input.name.trim().is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let mut store = db.write().await;
    store.last_id += 1;
    let todo = Todo {
        id: store.last_id,
        name: input.name,
        is_done: false,
    };
    store.todos.insert(todo.id, todo.clone());
    debug!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    if input.name.trim().is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let mut store = db.write().await;
    let todo = store.todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    todo.name = input.name;
    todo.is_done = input.is_done;
    debug!(id, is_done = todo.is_done, "updated todo");
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .todos
        .remove(&id)
        .map(|_| {
            debug!(id, "deleted todo");
            StatusCode::NO_CONTENT
        })
        .ok_or(StatusCode::NOT_FOUND)
}

//! Request builder and response parser for the to-do API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Whoever holds a `Transport` executes the round trip in between.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

/// Stateless request builder for the to-do API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/todos".to_string())
    }

    /// Fails with `EmptyName` when the name is blank, so a request for it is
    /// never built. The name is sent exactly as given.
    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        if input.name.trim().is_empty() {
            return Err(ApiError::EmptyName);
        }
        self.json_request(HttpMethod::Post, "/todos".to_string(), input)
    }

    pub fn build_update_todo(&self, id: TodoId, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, format!("/todos/{id}"), input)
    }

    pub fn build_delete_todo(&self, id: TodoId) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("/todos/{id}"))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    /// The body of a successful delete is ignored.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn request(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request<B: Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        body: &B,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let mut req = self.request(method, path);
        req.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        req.body = Some(body);
        Ok(req)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_todo_produces_correct_request() {
        let req = client().build_create_todo(&CreateTodo::new("Buy milk")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Buy milk"}));
    }

    #[test]
    fn build_create_todo_rejects_blank_names() {
        for name in ["", "   ", "\t\n"] {
            let err = client().build_create_todo(&CreateTodo::new(name)).unwrap_err();
            assert!(matches!(err, ApiError::EmptyName), "{name:?}");
        }
    }

    #[test]
    fn build_create_todo_sends_name_untrimmed() {
        let req = client().build_create_todo(&CreateTodo::new("  padded ")).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "  padded ");
    }

    #[test]
    fn build_update_todo_sends_full_replacement() {
        let input = UpdateTodo {
            name: "Buy milk".to_string(),
            is_done: true,
        };
        let req = client().build_update_todo(1, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:3000/todos/1");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Buy milk", "isDone": true}));
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(42);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:3000/todos/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_todos_success() {
        let response = HttpResponse::new(200, r#"[{"id":1,"name":"Test","isDone":false}]"#);
        let todos = client().parse_list_todos(response).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].name, "Test");
    }

    #[test]
    fn parse_list_todos_preserves_server_order() {
        let response = HttpResponse::new(
            200,
            r#"[{"id":9,"name":"b","isDone":true},{"id":2,"name":"a","isDone":false}]"#,
        );
        let ids: Vec<_> = client()
            .parse_list_todos(response)
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![9, 2]);
    }

    #[test]
    fn parse_create_todo_accepts_200_and_201() {
        for status in [200, 201] {
            let response = HttpResponse::new(status, r#"{"id":1,"name":"New","isDone":false}"#);
            let todo = client().parse_create_todo(response).unwrap();
            assert_eq!(todo.name, "New");
        }
    }

    #[test]
    fn parse_create_todo_wrong_status() {
        let response = HttpResponse::new(500, "internal error");
        let err = client().parse_create_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_update_todo_success() {
        let response = HttpResponse::new(200, r#"{"id":1,"name":"Updated","isDone":true}"#);
        let todo = client().parse_update_todo(response).unwrap();
        assert_eq!(todo.name, "Updated");
        assert!(todo.is_done);
    }

    #[test]
    fn parse_update_todo_not_found() {
        let err = client().parse_update_todo(HttpResponse::new(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_delete_todo_ignores_body() {
        assert!(client().parse_delete_todo(HttpResponse::new(204, "")).is_ok());
        assert!(client().parse_delete_todo(HttpResponse::new(200, "whatever")).is_ok());
    }

    #[test]
    fn parse_delete_todo_not_found() {
        let err = client().parse_delete_todo(HttpResponse::new(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        let req = client.build_list_todos();
        assert_eq!(req.url, "http://localhost:3000/todos");
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client()
            .parse_list_todos(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}

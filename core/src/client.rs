//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// Where the server listens by default, including the `/api` prefix.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl Default for TodoClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
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
        self.request(HttpMethod::Get, "todos", None)
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(self.request(HttpMethod::Post, "todos", Some(body)))
    }

    pub fn build_update_todo(&self, id: i64, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(self.request(HttpMethod::Put, &format!("todos/{id}"), Some(body)))
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        self.request(HttpMethod::Delete, &format!("todos/{id}"), None)
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        parse_json(&response, 200)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(&response, 201)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(&response, 200)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    fn request(&self, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
        let headers = match body {
            Some(_) => vec![("content-type".to_string(), "application/json".to_string())],
            None => Vec::new(),
        };
        HttpRequest {
            method,
            url: format!("{}/{path}", self.base_url),
            headers,
            body,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(ApiError::Serialization)
}

fn parse_json<T: DeserializeOwned>(response: &HttpResponse, expected: u16) -> Result<T, ApiError> {
    check_status(response, expected)?;
    serde_json::from_str(&response.body).map_err(ApiError::Deserialization)
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        422 => {
            let detail = serde_json::from_str::<ErrorBody>(&response.body)
                .map(|body| body.detail)
                .unwrap_or_else(|_| response.body.clone());
            Err(ApiError::Validation(detail))
        }
        status => Err(ApiError::Http {
            status,
            body: response.body.clone(),
        }),
    }
}

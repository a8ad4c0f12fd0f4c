//! Axum handlers for the todo routes.
//!
//! Each handler takes the store lock for the duration of one store call.
//! Body and path extractors are taken as `Result` so their rejections go
//! through `ApiError` and come back as 422 with a `detail` message.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use crate::error::ApiError;
use crate::model::{CreateTodo, Todo, UpdateTodo, Welcome};
use crate::SharedStore;

pub(crate) const WELCOME_MESSAGE: &str = "Welcome to the Todo List API";

pub(crate) async fn root() -> Json<Welcome> {
    Json(Welcome {
        message: WELCOME_MESSAGE,
    })
}

pub(crate) async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    let store = store.read().await;
    Json(store.list().to_vec())
}

pub(crate) async fn create_todo(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(input) = payload?;
    let todo = store.write().await.create(input);
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Routed as PUT but applies only the fields present in the body, so it
/// behaves like a PATCH.
pub(crate) async fn update_todo(
    State(store): State<SharedStore>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let todo = store.write().await.update(id, input)?;
    Ok(Json(todo))
}

pub(crate) async fn delete_todo(
    State(store): State<SharedStore>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    store.write().await.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

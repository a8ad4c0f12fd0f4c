//! HTTP server for the in-memory todo list.
//!
//! # Overview
//! `app` builds the axum `Router` over a caller-owned `SharedStore`; `run` and
//! `serve` bind it to a listener. Nothing is process-global, so every test
//! can start from its own fresh store.
//!
//! # Routes
//! - `GET /` welcome message
//! - `GET /api/todos` list all todos in insertion order
//! - `POST /api/todos` create, 201
//! - `PUT /api/todos/{id}` partial update, 404 if absent
//! - `DELETE /api/todos/{id}` remove, 204, 404 if absent

use std::{future::Future, sync::Arc};

use axum::{
    routing::{get, put},
    Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod cors;
pub mod error;
mod handlers;
pub mod model;
pub mod store;
pub mod telemetry;

pub use error::{ApiError, StoreError};
pub use model::{CreateTodo, Todo, UpdateTodo};
pub use store::TodoStore;

/// Handle to the store shared by all handlers.
pub type SharedStore = Arc<RwLock<TodoStore>>;

pub fn shared(store: TodoStore) -> SharedStore {
    Arc::new(RwLock::new(store))
}

pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/api/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/api/todos/{id}",
            put(handlers::update_todo).delete(handlers::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors::cors_layer())
        .with_state(store)
}

/// Router over a fresh store holding the seed records.
pub fn app_seeded() -> Router {
    app(shared(TodoStore::seeded()))
}

pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    serve(listener, store, std::future::pending::<()>()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn serve<F>(
    listener: TcpListener,
    store: SharedStore,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown)
        .await
}

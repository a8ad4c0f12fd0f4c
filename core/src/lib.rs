//! Synchronous API client for the todo service.
//!
//! # Overview
//! Covers the four calls a frontend makes: list, add, update and delete.
//! `TodoClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network; the caller executes the round-trip.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and both halves are testable without a server.
//! - DTOs are defined independently from the server crate.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{TodoClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Todo, UpdateTodo};

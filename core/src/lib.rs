//! Synchronous client core for the users service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). A `Transport` supplied by
//! the embedding front end performs the round-trip, and `UserListView` keeps
//! the list screen's state on top of that.
//!
//! # Design
//! - `UserClient` is stateless: it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `UsersApi` glues one build, one transport call and one parse together.
//! - `UserListView` takes its `UsersApi` as a constructor argument; there is
//!   no process-wide client.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use api::UsersApi;
pub use client::UserClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use types::{CreateUser, UpdateUser, User, UserId};
pub use view::{Deletion, Field, Modal, UserForm, UserListView, CONFIRM_DELETE};

/// Base URL the service is expected at when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

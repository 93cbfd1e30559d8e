//! Domain DTOs for the users API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! `password` is write-only from the client's side. It is sent on create and
//! optionally on update, and is only present on a `User` when the backend
//! chooses to echo it back.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Server-assigned record identifier.
///
/// Opaque to the client: backends hand out either integers or strings (UUIDs
/// included), and the value is echoed back verbatim in `/users/{id}` paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Num(i64),
    Str(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Num(n) => write!(f, "{n}"),
            UserId::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for UserId {
    fn from(n: i64) -> Self {
        UserId::Num(n)
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        UserId::Str(id.to_string())
    }
}

/// A single user record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Date of birth as entered, e.g. `1990-04-01`.
    pub dob: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Request payload for creating a new user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub dob: String,
    pub password: String,
}

/// Request payload for replacing an existing user's fields.
///
/// A `None` password is left out of the JSON so the server keeps the one it
/// already has.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,
    pub dob: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl User {
    /// Overwrite this record's fields with an accepted update.
    pub fn apply(&mut self, update: &UpdateUser) {
        self.name.clone_from(&update.name);
        self.email.clone_from(&update.email);
        self.dob.clone_from(&update.dob);
        if let Some(password) = &update.password {
            self.password = Some(password.clone());
        }
    }
}

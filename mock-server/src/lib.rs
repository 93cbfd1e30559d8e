//! In-memory backend for the `/users` resource.
//!
//! Records are kept in insertion order. Passwords are stored but never
//! serialized back out.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub dob: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub dob: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,
    pub dob: String,
    pub password: Option<String>,
}

pub type Db = Arc<RwLock<Vec<User>>>;

/// Mount prefix used by [`run`], matching the client's default base URL.
pub const API_PREFIX: &str = "/api";

pub fn app() -> Router {
    app_with_db(Db::default())
}

/// Build the router over a caller-owned store so tests can inspect it.
pub fn app_with_db(db: Db) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    let router = Router::new().nest(API_PREFIX, app_with_db(db));
    axum::serve(listener, router).await
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    Json(db.read().await.clone())
}

async fn create_user(
    State(db): State<Db>,
    Json(input): Json<CreateUser>,
) -> (StatusCode, Json<User>) {
    let user = User {
        id: Uuid::new_v4(),
        name: input.name,
        email: input.email,
        dob: input.dob,
        password: input.password,
    };
    info!(id = %user.id, "user created");
    db.write().await.push(user.clone());
    (StatusCode::CREATED, Json(user))
}

async fn get_user(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, StatusCode> {
    let users = db.read().await;
    users.iter().find(|u| u.id == id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateUser>,
) -> Result<Json<User>, StatusCode> {
    let mut users = db.write().await;
    let user = users.iter_mut().find(|u| u.id == id).ok_or(StatusCode::NOT_FOUND)?;
    user.name = input.name;
    user.email = input.email;
    user.dob = input.dob;
    if let Some(password) = input.password {
        user.password = password;
    }
    info!(%id, "user updated");
    Ok(Json(user.clone()))
}

async fn delete_user(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut users = db.write().await;
    let index = users.iter().position(|u| u.id == id).ok_or(StatusCode::NOT_FOUND)?;
    users.remove(index);
    info!(%id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}

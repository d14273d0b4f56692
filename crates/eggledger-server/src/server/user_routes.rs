//! User management routes.
//!
//! Listings return summaries only; password hashes never leave the storage
//! layer.

use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};
use tracing::info;

use super::AppState;
use super::error::ApiError;
use crate::storage::{Role, User, UserSummary};

fn summaries(users: Vec<User>) -> Vec<UserSummary> {
    users.into_iter().map(UserSummary::from).collect()
}

/// Full user listing. Admin-gated.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let users = summaries(state.db.list_users().await?);
    Ok(Json(json!({ "count": users.len(), "users": users })))
}

pub async fn list_admins(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let users = summaries(state.db.list_users_by_role(Role::Admin).await?);
    Ok(Json(json!({ "count": users.len(), "users": users })))
}

pub async fn list_watchers(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let users = summaries(state.db.list_users_by_role(Role::Watcher).await?);
    Ok(Json(json!({ "count": users.len(), "users": users })))
}

/// Delete a user by username. Admin-gated.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !state.db.delete_user(&username).await? {
        return Err(ApiError::UserNotFound);
    }

    info!(username = %username, "User deleted");
    Ok(Json(json!({ "message": "User deleted successfully" })))
}

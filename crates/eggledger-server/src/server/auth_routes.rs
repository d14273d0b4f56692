//! Registration, login, and token verification routes.

use axum::extract::State;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, warn};

use super::AppState;
use super::error::ApiError;
use crate::auth::claims::Claims;
use crate::auth::password;
use crate::storage::{Role, UserSummary};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub firstname: String,
    pub lastname: String,
    #[serde(rename = "type")]
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<Value>, ApiError> {
    if state.db.get_user(&req.username).await.is_ok() {
        return Err(ApiError::DuplicateUsername);
    }

    let hash = password::hash_password(&req.password)
        .map_err(|e| ApiError::Internal(format!("Password hashing failed: {e}")))?;

    state
        .db
        .create_user(&req.username, &hash, &req.firstname, &req.lastname, req.role)
        .await?;

    info!(username = %req.username, "User created");

    Ok(Json(json!({ "message": "User created successfully" })))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    // An unknown username and a wrong password are indistinguishable to the
    // caller.
    let user = state
        .db
        .get_user(&req.username)
        .await
        .map_err(|_| ApiError::InvalidCredentials)?;

    let valid = password::verify_password(&req.password, &user.password_hash)
        .map_err(|e| ApiError::Internal(format!("Password verification failed: {e}")))?;

    if !valid {
        warn!(username = %req.username, "Failed login attempt");
        return Err(ApiError::InvalidCredentials);
    }

    let token = state
        .jwt
        .issue(&user.username, &user.firstname, &user.lastname, user.role)
        .map_err(|e| ApiError::Internal(format!("Token creation failed: {e}")))?;

    info!(username = %user.username, "User logged in");

    Ok(Json(json!({
        "message": "Login success",
        "token": token,
        "user": UserSummary::from(user),
    })))
}

/// Echo the validated claims back to the caller.
pub async fn verify(Extension(claims): Extension<Claims>) -> Json<Value> {
    Json(json!({ "valid": true, "user": UserSummary::from(&claims) }))
}

pub async fn profile(Extension(claims): Extension<Claims>) -> Json<Value> {
    Json(json!({ "user": UserSummary::from(&claims) }))
}

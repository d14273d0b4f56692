//! Shared test helpers for route test modules.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use super::{AppState, build_router};
use crate::auth::JwtManager;
use crate::auth::password;
use crate::storage::{Database, Role};

pub const TEST_SECRET: &[u8] = b"test-secret";

/// Build a router over an in-memory database, returning the state alongside
/// it so tests can seed data directly.
pub async fn test_app() -> (Router, AppState) {
    let db = Database::open_in_memory().await.unwrap();
    let jwt = Arc::new(JwtManager::new(TEST_SECRET, 86400));
    let state = AppState { db, jwt };
    (build_router(state.clone()), state)
}

/// Send a JSON request and return (status, parsed body).
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (u16, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Seed a user directly in the store and return a valid session token.
pub async fn seed_user(state: &AppState, username: &str, role: Role) -> String {
    let hash = password::hash_password("password123").unwrap();
    state
        .db
        .create_user(username, &hash, "Test", "User", role)
        .await
        .unwrap();
    state.jwt.issue(username, "Test", "User", role).unwrap()
}

//! Per-user settings blob routes.
//!
//! The payload is opaque to the server: it is stored verbatim and replaced
//! wholesale on every save. None of its fields are interpreted or enforced
//! here.

use axum::extract::State;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{Value, json};

use super::AppState;
use super::error::ApiError;
use crate::auth::claims::Claims;

#[derive(Debug, Deserialize)]
pub struct SaveSettings {
    pub settings: Value,
}

/// Return the stored blob, or JSON `null` when the user has never saved one
/// (the client falls back to its own defaults).
pub async fn get_settings(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Value>, ApiError> {
    let payload = match state.db.get_settings(&claims.sub).await? {
        Some(row) => serde_json::from_str(&row.payload)
            .map_err(|e| ApiError::Internal(format!("Corrupt settings payload: {e}")))?,
        None => Value::Null,
    };

    Ok(Json(json!({ "settings": payload })))
}

/// Replace the stored blob. Last writer wins; there is no field-level merge.
pub async fn save_settings(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<SaveSettings>,
) -> Result<Json<Value>, ApiError> {
    let payload = serde_json::to_string(&req.settings)
        .map_err(|e| ApiError::Internal(format!("Settings serialization failed: {e}")))?;

    state.db.put_settings(&claims.sub, &payload).await?;

    Ok(Json(json!({ "message": "Settings saved successfully" })))
}

//! Production record CRUD, parameterized by farm.
//!
//! One route family serves all four sites: it is nested once per farm path
//! with the selector injected as a request extension at router construction,
//! so there is a single code path instead of four copies.

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Extension, Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;
use uuid::Uuid;

use super::AppState;
use super::error::ApiError;
use crate::storage::{DatabaseError, FarmNumber};

pub fn routes(farm: FarmNumber) -> Router<AppState> {
    Router::new()
        .route("/", get(list_records).post(create_record))
        .route("/{id}", put(update_record).delete(delete_record))
        .layer(Extension(farm))
}

#[derive(Debug, Deserialize)]
pub struct CreateRecord {
    pub eggs: i64,
    pub flats: i64,
    pub packets: i64,
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRecord {
    pub eggs: i64,
    pub flats: i64,
    pub packets: i64,
}

pub async fn create_record(
    State(state): State<AppState>,
    Extension(farm): Extension<FarmNumber>,
    Json(req): Json<CreateRecord>,
) -> Result<Json<Value>, ApiError> {
    let id = Uuid::new_v4().to_string();
    let record = state
        .db
        .create_record(&id, farm, req.eggs, req.flats, req.packets, &req.date)
        .await?;

    info!(farm = %farm, id = %record.id, "Record created");
    Ok(Json(
        json!({ "message": "Record created successfully", "record": record }),
    ))
}

pub async fn list_records(
    State(state): State<AppState>,
    Extension(farm): Extension<FarmNumber>,
) -> Result<Json<Value>, ApiError> {
    let records = state.db.list_records(farm).await?;
    Ok(Json(json!({ "records": records })))
}

/// Update a record's counts in place.
///
/// Lookup is by id alone; the farm selector on the route does not scope the
/// update, so a valid id belonging to another farm is mutated as-is.
pub async fn update_record(
    State(state): State<AppState>,
    Extension(_farm): Extension<FarmNumber>,
    Path(id): Path<String>,
    Json(req): Json<UpdateRecord>,
) -> Result<Json<Value>, ApiError> {
    let record = state
        .db
        .update_record(&id, req.eggs, req.flats, req.packets)
        .await
        .map_err(|e| match e {
            DatabaseError::NotFound(_) => ApiError::RecordNotFound,
            other => other.into(),
        })?;

    info!(id = %record.id, "Record updated");
    Ok(Json(
        json!({ "message": "Record updated successfully", "record": record }),
    ))
}

/// Delete a record. Same id-only lookup as [`update_record`].
pub async fn delete_record(
    State(state): State<AppState>,
    Extension(_farm): Extension<FarmNumber>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !state.db.delete_record(&id).await? {
        return Err(ApiError::RecordNotFound);
    }

    info!(id = %id, "Record deleted");
    Ok(Json(json!({ "message": "Record deleted successfully" })))
}

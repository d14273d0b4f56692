//! HTTP error mapping for the eggledger API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::storage::DatabaseError;

/// API failure taxonomy. Every service-layer failure is mapped to an HTTP
/// status plus a JSON `{"message": ...}` body at this boundary; nothing is
/// retried, and no failed request takes the process down.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No bearer token on a protected route.
    #[error("No token provided")]
    MissingToken,

    /// Token present but the signature, shape, or expiry check failed.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Authenticated, but the role does not permit the operation.
    #[error("Access denied")]
    Forbidden,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Username already taken")]
    DuplicateUsername,

    #[error("Record not found")]
    RecordNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Internal(String),
}

impl From<DatabaseError> for ApiError {
    fn from(e: DatabaseError) -> Self {
        Self::Storage(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            // Clients distinguish a missing token (403) from a token that
            // fails verification (401).
            Self::MissingToken | Self::Forbidden => StatusCode::FORBIDDEN,
            Self::InvalidToken | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::DuplicateUsername => StatusCode::CONFLICT,
            Self::RecordNotFound | Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

//! Bearer-token middleware for protected routes.

use axum::Extension;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use super::AppState;
use super::error::ApiError;
use crate::auth::claims::Claims;

/// Extract and validate the JWT from the authorization header and attach the
/// claims to the request for downstream handlers.
///
/// Runs before any storage access; the user store is never consulted here.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(ApiError::MissingToken)?;

    let claims = state
        .jwt
        .validate(token)
        .map_err(|_| ApiError::InvalidToken)?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Role gate layered on top of [`authenticate`]: rejects non-admin claims.
pub async fn require_admin(
    Extension(claims): Extension<Claims>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !claims.is_admin() {
        return Err(ApiError::Forbidden);
    }
    Ok(next.run(req).await)
}

//! HTTP routes and middleware for the eggledger server.

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::{Router, middleware as axum_middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::JwtManager;
use crate::storage::{Database, FarmNumber};

pub mod auth_routes;
pub mod error;
pub mod farm_routes;
pub mod middleware;
pub mod settings_routes;
pub mod user_routes;

#[cfg(test)]
mod test_helpers;


pub use error::ApiError;

/// Shared state injected into every handler. Constructed once in `main` and
/// cloned per request; the database clone shares one pool.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub jwt: Arc<JwtManager>,
}

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    // User management is admin-gated on top of the bearer check.
    let admin = Router::new()
        .route("/users", get(user_routes::list_users))
        .route("/users/{username}", delete(user_routes::delete_user))
        .route_layer(axum_middleware::from_fn(middleware::require_admin));

    // Everything behind the bearer-token gate. The farm route family is
    // nested once per site with its selector injected as an extension.
    let protected = Router::new()
        .route("/verify", get(auth_routes::verify))
        .route("/profile", get(auth_routes::profile))
        .route("/users/admin", get(user_routes::list_admins))
        .route("/users/watcher", get(user_routes::list_watchers))
        .merge(admin)
        .nest("/farm1", farm_routes::routes(FarmNumber::One))
        .nest("/farm2", farm_routes::routes(FarmNumber::Two))
        .nest("/farm3", farm_routes::routes(FarmNumber::Three))
        .nest("/farm4", farm_routes::routes(FarmNumber::Four))
        .route(
            "/settings",
            get(settings_routes::get_settings).post(settings_routes::save_settings),
        )
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::authenticate,
        ));

    Router::new()
        .route("/register", post(auth_routes::register))
        .route("/login", post(auth_routes::login))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

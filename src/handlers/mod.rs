// Request handlers and router assembly

pub mod auth;
pub mod health;

use axum::routing::{get, post};
use axum::Router;
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the application router.
///
/// Anything not matched by an API route falls through to the static file
/// server rooted at `static_dir`; missing files get a plain 404.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

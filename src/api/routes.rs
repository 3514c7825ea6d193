//! API Routes
//!
//! Configures the Axum router with all endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, profile_check_handler, profile_handler, summarize_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /profile` - Generate or fetch a cached user profile
/// - `POST /profile/check` - Check whether a profile is cached
/// - `POST /summarize` - Summarize a post and answer it
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (the clients are browser extensions)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/profile", post(profile_handler))
        .route("/profile/check", post(profile_check_handler))
        .route("/summarize", post(summarize_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

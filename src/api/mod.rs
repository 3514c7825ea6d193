//! API Module
//!
//! HTTP handlers and routing for the REST API.
//!
//! # Endpoints
//! - `POST /profile` - Generate or fetch a cached user profile
//! - `POST /profile/check` - Check whether a profile is cached
//! - `POST /summarize` - Summarize a post and answer it
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

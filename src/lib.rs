//! Reddit Lens - Reddit profiles and post summaries generated by an LLM
//!
//! Fetches public Reddit activity, asks a completion API for a profile or a
//! summary plus reply, and caches every result in a flat JSON file.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod prompts;
pub mod reddit;
pub mod sanitize;
pub mod services;

#[cfg(test)]
mod stub_server;

pub use api::AppState;
pub use config::Config;

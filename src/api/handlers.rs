//! API Handlers
//!
//! HTTP request handlers for each endpoint. Validation happens here; the
//! cache and generation flow lives in [`crate::services`].

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{info, warn};

use crate::cache::JsonFileStore;
use crate::config::Config;
use crate::error::{AppError, FetchError, Result};
use crate::llm::{CompletionClient, OpenAIClient};
use crate::models::{
    HealthResponse, ProfileCheckRequest, ProfileCheckResponse, ProfileRequest, ProfileResponse,
    SummarizeRequest, SummarizeResponse,
};
use crate::reddit::{ContentSource, RedditClient};
use crate::services::{self, SummarySettings};

/// Application state shared across all handlers.
///
/// Caches are plain file handles; every request reloads them from disk.
#[derive(Clone)]
pub struct AppState {
    /// Username -> profile text
    pub profile_cache: JsonFileStore,
    /// Post URL -> summary record
    pub summary_cache: JsonFileStore,
    /// Reddit content source
    pub content: Arc<dyn ContentSource>,
    /// Completion client, absent when no API key is configured
    pub completions: Option<Arc<dyn CompletionClient>>,
    /// Summarize flow settings
    pub summary_settings: Arc<SummarySettings>,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(
        profile_cache: JsonFileStore,
        summary_cache: JsonFileStore,
        content: Arc<dyn ContentSource>,
        completions: Option<Arc<dyn CompletionClient>>,
        summary_settings: SummarySettings,
    ) -> Self {
        Self {
            profile_cache,
            summary_cache,
            content,
            completions,
            summary_settings: Arc::new(summary_settings),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the Reddit client and, when a key is set, the OpenAI client.
    pub fn from_config(config: &Config) -> std::result::Result<Self, FetchError> {
        let content = RedditClient::new(
            config.reddit_base_url.clone(),
            std::time::Duration::from_secs(config.fetch_timeout_secs),
        )?;

        let completions = config.openai_api_key.as_ref().map(|key| {
            Arc::new(OpenAIClient::new(
                key.clone(),
                config.openai_model.clone(),
                config.openai_base_url.clone(),
            )) as Arc<dyn CompletionClient>
        });

        Ok(Self::new(
            JsonFileStore::new(&config.profile_cache_file),
            JsonFileStore::new(&config.summary_cache_file),
            Arc::new(content),
            completions,
            SummarySettings {
                language: config.summary_language.clone(),
                cost_per_1k_tokens: config.cost_per_1k_tokens,
            },
        ))
    }

    fn completions(&self) -> Result<&dyn CompletionClient> {
        self.completions.as_deref().ok_or_else(|| {
            warn!("Rejecting request: no API key configured");
            AppError::MissingApiKey
        })
    }
}

/// Handler for POST /profile
///
/// Returns the cached or freshly generated profile for a username.
pub async fn profile_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ProfileRequest>, JsonRejection>,
) -> Result<Json<ProfileResponse>> {
    let Json(req) = payload?;
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }
    let llm = state.completions()?;

    info!(
        "Received profile request for {} (force={})",
        req.username, req.force
    );
    let profile = services::generate_profile(
        &state.profile_cache,
        state.content.as_ref(),
        llm,
        &req.username,
        req.force,
    )
    .await?;

    Ok(Json(ProfileResponse::new(profile)))
}

/// Handler for POST /profile/check
///
/// Reports whether a profile is cached. Never fetches or generates.
pub async fn profile_check_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ProfileCheckRequest>, JsonRejection>,
) -> Result<Json<ProfileCheckResponse>> {
    let Json(req) = payload?;
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let cached = services::is_cached(&state.profile_cache, &req.username);
    Ok(Json(ProfileCheckResponse { cached }))
}

/// Handler for POST /summarize
///
/// Returns a summary of a Reddit post and a sarcastic answer to it.
pub async fn summarize_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>> {
    let llm = state.completions()?;
    let Json(req) = payload?;

    info!(
        "Received summarize request for URL: {} (force={})",
        req.url, req.force
    );
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let post = services::summarize_post(
        &state.summary_cache,
        state.content.as_ref(),
        llm,
        &state.summary_settings,
        &req.url,
        req.force,
    )
    .await?;

    Ok(Json(post.into()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

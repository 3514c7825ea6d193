//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Service configuration parameters.
///
/// Built once at startup and handed to the components that need it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Completion API key. `None` leaves the generating endpoints answering 400.
    pub openai_api_key: Option<String>,
    /// Model identifier sent with every completion request
    pub openai_model: String,
    /// Base URL of the OpenAI-compatible API
    pub openai_base_url: String,
    /// Base URL of the Reddit JSON listings
    pub reddit_base_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Cache file for generated profiles
    pub profile_cache_file: PathBuf,
    /// Cache file for post summaries and answers
    pub summary_cache_file: PathBuf,
    /// Timeout in seconds for Reddit fetches
    pub fetch_timeout_secs: u64,
    /// Language summaries are written in
    pub summary_language: String,
    /// Estimated price in dollars per thousand tokens
    pub cost_per_1k_tokens: f64,
    /// Optional file receiving a copy of the logs
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `OPENAI_API_KEY` - Completion API key (default: none)
    /// - `OPENAI_MODEL` - Model name (default: gpt-3.5-turbo)
    /// - `OPENAI_BASE_URL` - API base (default: https://api.openai.com/v1)
    /// - `REDDIT_BASE_URL` - Reddit base (default: https://www.reddit.com)
    /// - `SERVER_PORT` - HTTP server port (default: 5001)
    /// - `PROFILE_CACHE_FILE` - Profile cache path (default: profile_cache.json)
    /// - `SUMMARY_CACHE_FILE` - Summary cache path (default: summary_cache.json)
    /// - `FETCH_TIMEOUT_SECS` - Reddit fetch timeout (default: 10)
    /// - `SUMMARY_LANGUAGE` - Summary language (default: French)
    /// - `COST_PER_1K_TOKENS` - Cost estimate rate (default: 0.002)
    /// - `LOG_FILE` - Extra log destination (default: none)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            openai_model: non_empty_var("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            openai_base_url: non_empty_var("OPENAI_BASE_URL")
                .unwrap_or(defaults.openai_base_url),
            reddit_base_url: non_empty_var("REDDIT_BASE_URL")
                .unwrap_or(defaults.reddit_base_url),
            server_port: parsed_var("SERVER_PORT").unwrap_or(defaults.server_port),
            profile_cache_file: non_empty_var("PROFILE_CACHE_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.profile_cache_file),
            summary_cache_file: non_empty_var("SUMMARY_CACHE_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.summary_cache_file),
            fetch_timeout_secs: parsed_var("FETCH_TIMEOUT_SECS")
                .unwrap_or(defaults.fetch_timeout_secs),
            summary_language: non_empty_var("SUMMARY_LANGUAGE")
                .unwrap_or(defaults.summary_language),
            cost_per_1k_tokens: parsed_var("COST_PER_1K_TOKENS")
                .unwrap_or(defaults.cost_per_1k_tokens),
            log_file: non_empty_var("LOG_FILE").map(PathBuf::from),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: "gpt-3.5-turbo".to_string(),
            openai_base_url: "https://api.openai.com/v1".to_string(),
            reddit_base_url: "https://www.reddit.com".to_string(),
            server_port: 5001,
            profile_cache_file: PathBuf::from("profile_cache.json"),
            summary_cache_file: PathBuf::from("summary_cache.json"),
            fetch_timeout_secs: 10,
            summary_language: "French".to_string(),
            cost_per_1k_tokens: 0.002,
            log_file: None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parsed_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

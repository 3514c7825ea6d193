//! Request DTOs for the HTTP API
//!
//! Defines the structure of incoming HTTP request bodies. Every field has a
//! default, and an explicit `null` counts as missing, so both reach
//! validation instead of failing extraction.

use serde::{Deserialize, Deserializer};

/// Request body for POST /profile
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileRequest {
    /// Reddit username, the cache key
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    /// Regenerate even if cached
    #[serde(default, deserialize_with = "null_as_default")]
    pub force: bool,
}

impl ProfileRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_username(&self.username)
    }
}

/// Request body for POST /profile/check
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileCheckRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
}

impl ProfileCheckRequest {
    pub fn validate(&self) -> Option<String> {
        validate_username(&self.username)
    }
}

/// Request body for POST /summarize
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummarizeRequest {
    /// Reddit post URL, the cache key
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    /// Regenerate the answer even if cached
    #[serde(default, deserialize_with = "null_as_default")]
    pub force: bool,
}

impl SummarizeRequest {
    /// The URL must be non-empty and point at reddit.com.
    pub fn validate(&self) -> Option<String> {
        if self.url.is_empty() || !self.url.contains("reddit.com") {
            return Some("Invalid URL".to_string());
        }
        None
    }
}

/// Reads an optional value, mapping `null` to the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn validate_username(username: &str) -> Option<String> {
    if username.is_empty() {
        return Some("Missing username".to_string());
    }
    None
}

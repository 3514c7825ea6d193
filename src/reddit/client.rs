//! Reddit HTTP client.
//! Reads public JSON listings without authentication.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::USER_AGENT, Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::FetchError;

use super::format;
use super::types::Listing;
use super::ContentSource;

const PROFILE_USER_AGENT: &str = "Mozilla/5.0";
const POST_USER_AGENT: &str = "tldr-reddit/0.1";
const COMMENT_LIMIT: u32 = 50;
const POST_LIMIT: u32 = 10;

/// Reddit listing client with a fixed request timeout.
#[derive(Debug, Clone)]
pub struct RedditClient {
    client: Client,
    base_url: String,
}

impl RedditClient {
    /// Create a client for `base_url` (e.g. `https://www.reddit.com`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        user_agent: &str,
    ) -> Result<T, FetchError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Malformed(e.to_string()))
    }

    async fn user_listing(
        &self,
        username: &str,
        kind: &str,
        limit: u32,
    ) -> Result<Listing, FetchError> {
        let url = format!(
            "{}/user/{}/{}.json?limit={}",
            self.base_url, username, kind, limit
        );
        self.get_json(&url, PROFILE_USER_AGENT).await
    }
}

#[async_trait]
impl ContentSource for RedditClient {
    async fn user_comments(&self, username: &str) -> Result<Vec<String>, FetchError> {
        let listing = self.user_listing(username, "comments", COMMENT_LIMIT).await?;
        Ok(format::comment_lines(&listing))
    }

    async fn user_posts(&self, username: &str) -> Result<Vec<String>, FetchError> {
        let listing = self.user_listing(username, "submitted", POST_LIMIT).await?;
        Ok(format::post_lines(&listing))
    }

    async fn post(&self, url: &str) -> Result<Option<String>, FetchError> {
        let Some(post_id) = format::post_id(url) else {
            return Ok(None);
        };

        let api_url = format!("{}/comments/{}.json", self.base_url, post_id);
        let listings: Vec<Listing> = self.get_json(&api_url, POST_USER_AGENT).await?;
        let post = listings
            .first()
            .and_then(|listing| listing.data.children.first())
            .ok_or_else(|| FetchError::Malformed(format!("no post in {}", api_url)))?;

        Ok(format::post_text(&post.data))
    }
}

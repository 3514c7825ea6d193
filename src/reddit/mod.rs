//! Reddit Module
//!
//! Fetches public Reddit listings and flattens them into prompt text.

mod client;
pub mod format;
pub mod types;

use async_trait::async_trait;

use crate::error::FetchError;

pub use client::RedditClient;

/// Source of Reddit content for the orchestrators.
///
/// Failures are reported, not swallowed; callers choose whether to degrade.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// The user's recent comments, one `"{subreddit}: {body}"` line each.
    async fn user_comments(&self, username: &str) -> Result<Vec<String>, FetchError>;

    /// The user's recent submissions, one `"{subreddit}: {title} - {selftext}"` line each.
    async fn user_posts(&self, username: &str) -> Result<Vec<String>, FetchError>;

    /// Title and body of the post at `url`. `Ok(None)` when the URL has no
    /// post id or the post has no text.
    async fn post(&self, url: &str) -> Result<Option<String>, FetchError>;
}

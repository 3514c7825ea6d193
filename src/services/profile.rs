//! Profile generation flow
//!
//! Cache lookup (with optional forced invalidation), Reddit fetch, one
//! completion call, emoji cleanup, cache write.

use tracing::{error, info, warn};

use crate::cache::{JsonFileStore, CACHE_HIT_MARKER};
use crate::error::Result;
use crate::llm::{CompletionClient, Message};
use crate::prompts;
use crate::reddit::{format, ContentSource};
use crate::sanitize::strip_emojis;

/// Returns the profile for `username`, generating and caching it on a miss.
///
/// Cached profiles come back prefixed with [`CACHE_HIT_MARKER`]. With
/// `force`, any cached profile is deleted and persisted before the lookup,
/// so a failed regeneration leaves the key absent.
pub async fn generate_profile(
    cache: &JsonFileStore,
    source: &dyn ContentSource,
    llm: &dyn CompletionClient,
    username: &str,
    force: bool,
) -> Result<String> {
    if force && cache.delete(username)? {
        info!("Profile for {} removed from cache (force)", username);
    }

    if let Some(cached) = cache.get::<String>(username) {
        info!("Profile for {} loaded from cache", username);
        return Ok(format!("{}{}", CACHE_HIT_MARKER, cached));
    }

    let activity = fetch_activity(source, username).await;
    let prompt = prompts::profile_prompt(&activity);

    let completion = llm
        .complete(vec![Message::user(prompt)], Some(prompts::PROFILE_MAX_TOKENS))
        .await
        .inspect_err(|e| error!("Completion failed for profile {}: {}", username, e))?;

    let profile = strip_emojis(&completion.text);
    cache.put(username, &profile)?;
    info!(
        "Profile for {} generated ({} tokens)",
        username, completion.total_tokens
    );

    Ok(profile)
}

/// Reports whether a profile is cached, without fetching or generating.
pub fn is_cached(cache: &JsonFileStore, username: &str) -> bool {
    cache.contains(username)
}

/// Comments and posts as one text blob. A failed half is logged and left empty.
async fn fetch_activity(source: &dyn ContentSource, username: &str) -> String {
    let comments = source.user_comments(username).await.unwrap_or_else(|e| {
        warn!("Could not fetch comments for {}: {}", username, e);
        Vec::new()
    });
    let posts = source.user_posts(username).await.unwrap_or_else(|e| {
        warn!("Could not fetch posts for {}: {}", username, e);
        Vec::new()
    });

    format::activity_text(&comments, &posts)
}

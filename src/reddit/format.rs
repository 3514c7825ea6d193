//! Turns Reddit listings into the plain text fed to the prompts.

use super::types::{Listing, ThingData};

const COMMENTS_HEADER: &str = "Commentaires:\n";
const POSTS_HEADER: &str = "\n\nPosts:\n";
const COMMENTS_SEGMENT: &str = "/comments/";

/// Collapses newlines and tabs into spaces and trims the result.
pub fn flatten(text: &str) -> String {
    text.replace(['\n', '\t'], " ").trim().to_string()
}

/// `"{subreddit}: {body}"`
pub fn comment_line(data: &ThingData) -> String {
    format!("{}: {}", data.subreddit(), flatten(data.body()))
}

/// `"{subreddit}: {title} - {selftext}"`
pub fn post_line(data: &ThingData) -> String {
    format!(
        "{}: {} - {}",
        data.subreddit(),
        flatten(data.title()),
        flatten(data.selftext())
    )
}

pub fn comment_lines(listing: &Listing) -> Vec<String> {
    listing
        .data
        .children
        .iter()
        .map(|child| comment_line(&child.data))
        .collect()
}

pub fn post_lines(listing: &Listing) -> Vec<String> {
    listing
        .data
        .children
        .iter()
        .map(|child| post_line(&child.data))
        .collect()
}

/// Joins a user's comments and posts under fixed section headers.
pub fn activity_text(comments: &[String], posts: &[String]) -> String {
    format!(
        "{}{}{}{}",
        COMMENTS_HEADER,
        comments.join("\n"),
        POSTS_HEADER,
        posts.join("\n")
    )
}

/// Extracts the post id from a post URL.
///
/// The id is the path segment right after `/comments/`; anything past it
/// (slug, query, fragment) is dropped. Returns `None` when there is no id or
/// it is not alphanumeric.
pub fn post_id(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once(COMMENTS_SEGMENT)?;
    let id = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(id)
}

/// `"Titre: {title}\nPost: {selftext}"`, or `None` when both are blank.
pub fn post_text(data: &ThingData) -> Option<String> {
    let title = data.title().trim();
    let selftext = data.selftext().trim();
    if title.is_empty() && selftext.is_empty() {
        return None;
    }
    Some(format!("Titre: {}\nPost: {}", title, selftext))
}

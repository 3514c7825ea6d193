//! Cache Entry Module
//!
//! Record cached for a summarized Reddit post.

use serde::{Deserialize, Serialize};

// == Post Entry ==
/// Cached generation results for one post URL.
///
/// Fields are only ever filled in; a forced refresh replaces the answer but
/// keeps the summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostEntry {
    /// Generated summary of the post
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Generated sarcastic reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

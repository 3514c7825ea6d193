//! Completion API client
//!
//! Trait seam plus the OpenAI implementation used in production.

mod client;
pub mod types;

use async_trait::async_trait;

use crate::error::CompletionError;

pub use client::OpenAIClient;
pub use types::{Completion, Message};

/// Generates text from a list of chat messages.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        messages: Vec<Message>,
        max_tokens: Option<u32>,
    ) -> Result<Completion, CompletionError>;
}

//! Post summary and reply flow
//!
//! The summary is generated once per URL and reused even on forced refresh;
//! the answer is regenerated on every forced request.

use tracing::{error, info, warn};

use crate::cache::{JsonFileStore, PostEntry};
use crate::error::{AppError, Result};
use crate::llm::{CompletionClient, Message};
use crate::prompts;
use crate::reddit::ContentSource;
use crate::sanitize::{clean_answer, strip_emojis};

use super::cost::TokenUsage;

/// Settings for the summarize flow.
#[derive(Debug, Clone)]
pub struct SummarySettings {
    /// Language the summary is written in
    pub language: String,
    /// Dollars per thousand tokens, for the logged estimate
    pub cost_per_1k_tokens: f64,
}

/// Summary and answer returned to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    pub summary: String,
    pub answer: String,
}

/// Produces the summary and sarcastic answer for the post at `url`.
///
/// Each generated field is persisted as soon as it exists, so a failure
/// while producing the answer keeps a freshly generated summary cached.
pub async fn summarize_post(
    cache: &JsonFileStore,
    source: &dyn ContentSource,
    llm: &dyn CompletionClient,
    settings: &SummarySettings,
    url: &str,
    force: bool,
) -> Result<PostSummary> {
    let mut entry: PostEntry = cache.get(url).unwrap_or_default();
    let mut usage = TokenUsage::default();
    let mut post_content: Option<String> = None;

    let summary = match entry.summary.clone() {
        Some(summary) => {
            info!("Loaded summary from cache for {}", url);
            summary
        }
        None => {
            let content = scrape(source, url).await?;
            let completion = llm
                .complete(
                    vec![
                        Message::system(prompts::summary_instructions(&settings.language)),
                        Message::user(content.clone()),
                    ],
                    None,
                )
                .await
                .inspect_err(|e| error!("Summary completion failed for {}: {}", url, e))?;
            usage.record(completion.total_tokens);

            let summary = strip_emojis(&completion.text);
            info!("Summary generated: {}...", preview(&summary));
            entry.summary = Some(summary.clone());
            cache.put(url, &entry)?;
            post_content = Some(content);
            summary
        }
    };

    let answer = match entry.answer.clone() {
        Some(answer) if !force => {
            info!("Loaded answer from cache for {}", url);
            answer
        }
        _ => {
            let content = match post_content {
                Some(content) => content,
                None => scrape(source, url).await?,
            };
            let completion = llm
                .complete(
                    vec![
                        Message::system(prompts::ANSWER_INSTRUCTIONS),
                        Message::user(content),
                    ],
                    None,
                )
                .await
                .inspect_err(|e| error!("Answer completion failed for {}: {}", url, e))?;
            usage.record(completion.total_tokens);

            let answer = clean_answer(&completion.text);
            info!("Answer generated: {}...", preview(&answer));
            entry.answer = Some(answer.clone());
            cache.put(url, &entry)?;
            answer
        }
    };

    info!(
        "Estimated completion cost for this request: ${:.6} (total tokens: {})",
        usage.estimated_cost(settings.cost_per_1k_tokens),
        usage.total_tokens
    );

    Ok(PostSummary { summary, answer })
}

/// Post text, or `PostUnavailable` when it cannot be fetched or is empty.
async fn scrape(source: &dyn ContentSource, url: &str) -> Result<String> {
    match source.post(url).await {
        Ok(Some(content)) => Ok(content),
        Ok(None) => {
            warn!("No post content found at {}", url);
            Err(AppError::PostUnavailable)
        }
        Err(e) => {
            warn!("Error scraping Reddit post {}: {}", url, e);
            Err(AppError::PostUnavailable)
        }
    }
}

fn preview(text: &str) -> String {
    text.chars().take(50).collect()
}

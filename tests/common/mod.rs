//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use reddit_lens::{
    api::create_router,
    cache::JsonFileStore,
    error::{CompletionError, FetchError},
    llm::{Completion, CompletionClient, Message},
    prompts::ANSWER_INSTRUCTIONS,
    reddit::ContentSource,
    services::SummarySettings,
    AppState,
};
use serde_json::Value;
use tempfile::TempDir;

// == Fake Reddit ==

/// Reddit stand-in. When `online` is false every fetch fails with a 429.
pub struct StubReddit {
    pub comments: Vec<String>,
    pub posts: Vec<String>,
    pub post: Option<String>,
    pub online: bool,
    /// Every fetch, listings and posts alike
    pub fetches: AtomicUsize,
    pub post_fetches: AtomicUsize,
}

impl StubReddit {
    pub fn new() -> Self {
        Self::with_activity(
            vec!["france: Je code en Rust"],
            vec!["rust: Mon premier crate - enfin publié"],
        )
    }

    pub fn with_activity(comments: Vec<&str>, posts: Vec<&str>) -> Self {
        Self {
            comments: comments.into_iter().map(String::from).collect(),
            posts: posts.into_iter().map(String::from).collect(),
            post: Some("Titre: Mon chat me juge\nPost: Il me regarde coder.".to_string()),
            online: true,
            fetches: AtomicUsize::new(0),
            post_fetches: AtomicUsize::new(0),
        }
    }

    pub fn with_post(text: &str) -> Self {
        Self {
            post: Some(text.to_string()),
            ..Self::with_activity(Vec::new(), Vec::new())
        }
    }

    pub fn offline() -> Self {
        Self {
            online: false,
            ..Self::with_activity(Vec::new(), Vec::new())
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn post_fetch_count(&self) -> usize {
        self.post_fetches.load(Ordering::SeqCst)
    }

    fn respond<T>(&self, value: T, path: String) -> Result<T, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.online {
            Ok(value)
        } else {
            Err(FetchError::Status {
                status: 429,
                url: path,
            })
        }
    }
}

#[async_trait]
impl ContentSource for StubReddit {
    async fn user_comments(&self, username: &str) -> Result<Vec<String>, FetchError> {
        self.respond(
            self.comments.clone(),
            format!("/user/{}/comments.json", username),
        )
    }

    async fn user_posts(&self, username: &str) -> Result<Vec<String>, FetchError> {
        self.respond(
            self.posts.clone(),
            format!("/user/{}/submitted.json", username),
        )
    }

    async fn post(&self, url: &str) -> Result<Option<String>, FetchError> {
        self.post_fetches.fetch_add(1, Ordering::SeqCst);
        self.respond(self.post.clone(), url.to_string())
    }
}

// == Fake completion API ==

/// Answers every call with `reply` and logs the messages.
///
/// `fail_with` makes every call fail; `fail_answers_with` only the calls
/// carrying the answer instructions.
pub struct StubCompletions {
    pub reply: String,
    pub error: Mutex<Option<String>>,
    pub answer_error: Mutex<Option<String>>,
    pub calls: Mutex<Vec<Vec<Message>>>,
}

impl StubCompletions {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            error: Mutex::new(None),
            answer_error: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_with(&self, message: &str) {
        *self.error.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_answers_with(&self, message: &str) {
        *self.answer_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn summary_calls(&self) -> usize {
        self.calls_with_system(|s| s.starts_with("Summarize"))
    }

    pub fn answer_calls(&self) -> usize {
        self.calls_with_system(|s| s == ANSWER_INSTRUCTIONS)
    }

    pub fn last_user_message(&self) -> String {
        self.calls
            .lock()
            .unwrap()
            .last()
            .and_then(|messages| messages.last())
            .and_then(|m| m.content.clone())
            .unwrap_or_default()
    }

    /// Content of the system message of call `index`.
    pub fn system_prompt(&self, index: usize) -> String {
        self.calls.lock().unwrap()[index]
            .iter()
            .find(|m| m.role == "system")
            .and_then(|m| m.content.clone())
            .unwrap_or_default()
    }

    fn calls_with_system(&self, matches: impl Fn(&str) -> bool) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|messages| {
                messages
                    .iter()
                    .find(|m| m.role == "system")
                    .and_then(|m| m.content.as_deref())
                    .is_some_and(&matches)
            })
            .count()
    }
}

#[async_trait]
impl CompletionClient for StubCompletions {
    async fn complete(
        &self,
        messages: Vec<Message>,
        _max_tokens: Option<u32>,
    ) -> Result<Completion, CompletionError> {
        let is_answer = messages
            .first()
            .and_then(|m| m.content.as_deref())
            .is_some_and(|content| content == ANSWER_INSTRUCTIONS);
        self.calls.lock().unwrap().push(messages);

        let error = self.error.lock().unwrap().clone();
        let error = match error {
            Some(message) => Some(message),
            None if is_answer => self.answer_error.lock().unwrap().clone(),
            None => None,
        };
        if let Some(message) = error {
            return Err(CompletionError::Api {
                status: 429,
                message,
            });
        }
        Ok(Completion {
            text: self.reply.clone(),
            total_tokens: 250,
        })
    }
}

// == App Harness ==

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub reddit: Arc<StubReddit>,
    pub llm: Arc<StubCompletions>,
    _dir: TempDir,
}

pub fn test_app(reddit: StubReddit, llm: StubCompletions) -> TestApp {
    let dir = TempDir::new().unwrap();
    let reddit = Arc::new(reddit);
    let llm = Arc::new(llm);

    let state = AppState::new(
        JsonFileStore::new(dir.path().join("profile_cache.json")),
        JsonFileStore::new(dir.path().join("summary_cache.json")),
        reddit.clone(),
        Some(llm.clone() as Arc<dyn CompletionClient>),
        summary_settings(),
    );

    TestApp {
        router: create_router(state.clone()),
        state,
        reddit,
        llm,
        _dir: dir,
    }
}

/// French summaries at the default rate.
pub fn summary_settings() -> SummarySettings {
    SummarySettings {
        language: "French".to_string(),
        cost_per_1k_tokens: 0.002,
    }
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

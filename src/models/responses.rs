//! Response DTOs for the HTTP API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::services::PostSummary;

/// Response body for POST /profile
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    /// Generated profile, prefixed with `[CACHE] ` on a cache hit
    pub profile: String,
}

impl ProfileResponse {
    pub fn new(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
        }
    }
}

/// Response body for POST /profile/check
#[derive(Debug, Clone, Serialize)]
pub struct ProfileCheckResponse {
    pub cached: bool,
}

/// Response body for POST /summarize
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub answer: String,
}

impl From<PostSummary> for SummarizeResponse {
    fn from(post: PostSummary) -> Self {
        Self {
            summary: post.summary,
            answer: post.answer,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_response_serialize() {
        let json = serde_json::to_string(&ProfileResponse::new("Genre: ?")).unwrap();
        assert_eq!(json, r#"{"profile":"Genre: ?"}"#);
    }

    #[test]
    fn test_check_response_serialize() {
        let json = serde_json::to_string(&ProfileCheckResponse { cached: true }).unwrap();
        assert_eq!(json, r#"{"cached":true}"#);
    }

    #[test]
    fn test_summarize_response_from_post_summary() {
        let resp = SummarizeResponse::from(PostSummary {
            summary: "s".to_string(),
            answer: "a".to_string(),
        });
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["summary"], "s");
        assert_eq!(json["answer"], "a");
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Missing username");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"error":"Missing username"}"#);
    }
}

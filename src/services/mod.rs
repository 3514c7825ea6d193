//! Services Module
//!
//! Request orchestration: cache decisions, fetching, generation, persistence.
//!
//! # Flows
//! - Profile: one completion per username, cached as plain text
//! - Summary: summary plus answer per post URL, cached as a record

pub mod cost;
pub mod profile;
pub mod summary;

pub use profile::{generate_profile, is_cached};
pub use summary::{summarize_post, PostSummary, SummarySettings};

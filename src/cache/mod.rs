//! Cache Module
//!
//! Flat key-value cache persisted to a single JSON file.

mod entry;
mod store;


// Re-export public types
pub use entry::PostEntry;
pub use store::JsonFileStore;

// == Public Constants ==
/// Prefix marking a profile that was served from the cache
pub const CACHE_HIT_MARKER: &str = "[CACHE] ";

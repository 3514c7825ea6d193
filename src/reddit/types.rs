//! Reddit JSON listing shapes.
//!
//! Only the fields the service reads are modelled. Reddit sends `null` for
//! some text fields, so they are optional and read through accessors.

use serde::Deserialize;

/// A `Listing` envelope: `{"kind": "Listing", "data": {"children": [...]}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub data: ListingData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<Thing>,
}

/// A listing child (comment `t1` or link `t3`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thing {
    #[serde(default)]
    pub data: ThingData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThingData {
    #[serde(default)]
    pub subreddit: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub selftext: Option<String>,
}

impl ThingData {
    pub fn subreddit(&self) -> &str {
        self.subreddit.as_deref().unwrap_or_default()
    }

    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn selftext(&self) -> &str {
        self.selftext.as_deref().unwrap_or_default()
    }
}

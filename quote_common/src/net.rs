//! Remote quote endpoint description and request helpers.

use std::time::Duration;

use chrono::Utc;

use crate::tags::{DEFAULT_TAGS, Tag, join_tags};

/// Public random-quote endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.quotable.io/random";
/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
/// Value sent in both `Cache-Control` and `Pragma` request headers.
pub const NO_CACHE: &str = "no-cache";

/// Where and what to ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Base URL without query string.
    pub base_url: String,
    /// Topical filter sent as the `tags` parameter.
    pub tags: Vec<Tag>,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TAGS.to_vec())
    }
}

impl Endpoint {
    /// Creates an endpoint; an empty tag list falls back to `DEFAULT_TAGS`.
    pub fn new(base_url: &str, tags: Vec<Tag>) -> Self {
        let tags = if tags.is_empty() {
            DEFAULT_TAGS.to_vec()
        } else {
            tags
        };
        Endpoint {
            base_url: base_url.trim().to_string(),
            tags,
        }
    }

    /// Query parameters for one request: the tag filter and a cache-busting timestamp.
    pub fn query_at(&self, timestamp_millis: i64) -> [(&'static str, String); 2] {
        [
            ("tags", join_tags(&self.tags)),
            ("t", timestamp_millis.to_string()),
        ]
    }

    /// Query parameters stamped with the current time.
    pub fn query(&self) -> [(&'static str, String); 2] {
        self.query_at(Utc::now().timestamp_millis())
    }
}

//! Configuration management for the story player Lambda.

use std::env;

use crate::{Error, Result};

/// Object key used when `LATEST_JSON_KEY` is not set.
pub const DEFAULT_LATEST_KEY: &str = "latest.json";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// S3 bucket holding the story metadata document
    pub bucket: Option<String>,
    /// Object key of the latest story metadata document
    pub latest_key: String,
    /// Inline metadata document; bypasses the network when set
    pub story_override: Option<String>,
    /// Origin replacing the bucket's public S3 endpoint
    pub feed_base_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bucket: None,
            latest_key: DEFAULT_LATEST_KEY.to_string(),
            story_override: None,
            feed_base_url: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nothing is required here. A skill without a reachable feed still
    /// answers every request, it just apologises when asked to play.
    pub fn from_env() -> Self {
        Self {
            bucket: non_empty_var("S3_BUCKET"),
            latest_key: non_empty_var("LATEST_JSON_KEY")
                .unwrap_or_else(|| DEFAULT_LATEST_KEY.to_string()),
            story_override: non_empty_var("TEST_LATEST_STORY_JSON"),
            feed_base_url: non_empty_var("STORY_FEED_BASE_URL"),
        }
    }

    /// Config that serves the given metadata document without touching the network.
    pub fn with_story_override(document: impl Into<String>) -> Self {
        Self {
            story_override: Some(document.into()),
            ..Self::default()
        }
    }

    /// Whether any source for the metadata document is configured.
    pub fn has_story_source(&self) -> bool {
        self.story_override.is_some() || self.feed_base_url.is_some() || self.bucket.is_some()
    }

    /// URL of the latest story metadata document.
    pub fn latest_story_url(&self) -> Result<String> {
        let origin = match (&self.feed_base_url, &self.bucket) {
            (Some(base), _) => base.trim_end_matches('/').to_string(),
            (None, Some(bucket)) => format!("https://{}.s3.amazonaws.com", bucket),
            (None, None) => {
                return Err(Error::Config(
                    "S3_BUCKET or STORY_FEED_BASE_URL must be set".to_string(),
                ))
            }
        };

        Ok(format!("{}/{}", origin, self.latest_key.trim_start_matches('/')))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

//! Latest story metadata and the client that fetches it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Config, Error, Result};

/// Title spoken when the document carries none.
pub const DEFAULT_TITLE: &str = "Latest story";
/// Stream token used when the document carries no id.
pub const DEFAULT_TOKEN: &str = "latest-story";

/// Metadata document describing the newest recorded story.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryMetadata {
    /// Story identifier, reused as the AudioPlayer token
    pub id: Option<String>,
    /// Human readable title
    pub title: Option<String>,
    /// Public URL of the MP3 recording
    pub audio_url: Option<String>,
}

impl StoryMetadata {
    /// Recording URL, if the story has one.
    pub fn playable_url(&self) -> Option<&str> {
        present(&self.audio_url)
    }

    /// Title to speak and display.
    pub fn display_title(&self) -> &str {
        present(&self.title).unwrap_or(DEFAULT_TITLE)
    }

    /// Token identifying this story's stream.
    pub fn stream_token(&self) -> &str {
        present(&self.id).unwrap_or(DEFAULT_TOKEN)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Client for the latest story feed.
#[derive(Debug, Clone, Default)]
pub struct StoryClient {
    http: reqwest::Client,
}

impl StoryClient {
    /// Create a new story client.
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetch the latest story metadata.
    ///
    /// An inline override in the config is parsed and returned without any
    /// network traffic. Otherwise a single GET is issued; there is no retry
    /// and nothing is cached between calls.
    pub async fn fetch_latest(&self, config: &Config) -> Result<StoryMetadata> {
        if let Some(document) = &config.story_override {
            debug!("Using inline story metadata override");
            return parse_document(document.as_bytes());
        }

        let url = config.latest_story_url()?;
        debug!(url = %url, "Fetching latest story metadata");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        parse_document(&body)
    }
}

/// A `null` document parses as an empty story rather than an error.
fn parse_document(bytes: &[u8]) -> Result<StoryMetadata> {
    let story: Option<StoryMetadata> = serde_json::from_slice(bytes)?;
    Ok(story.unwrap_or_default())
}

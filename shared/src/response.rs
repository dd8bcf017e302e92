//! Outbound Alexa response envelope and the builder that assembles it.

use serde::{Deserialize, Serialize};

/// Response envelope returned to Alexa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlexaResponse {
    pub version: String,
    pub response: ResponseBody,
}

/// Body of the response. Unset fields are omitted from the JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub ssml: String,
}

impl OutputSpeech {
    /// Wrap plain text in a `<speak>` element, escaping markup characters.
    pub fn ssml(text: &str) -> Self {
        Self {
            speech_type: "SSML".to_string(),
            ssml: format!("<speak>{}</speak>", escape_ssml(text)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// Directive instructing the device's audio player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Directive {
    #[serde(rename = "AudioPlayer.Play", rename_all = "camelCase")]
    Play {
        play_behavior: PlayBehavior,
        audio_item: AudioItem,
    },
    #[serde(rename = "AudioPlayer.Stop")]
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayBehavior {
    /// Stop current playback and clear the queue
    ReplaceAll,
    /// Append to the end of the queue
    Enqueue,
    /// Replace everything queued after the current stream
    ReplaceEnqueued,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioItem {
    pub stream: Stream,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AudioItemMetadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub url: String,
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_previous_token: Option<String>,
    pub offset_in_milliseconds: u64,
}

/// Display metadata shown on devices with a screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioItemMetadata {
    pub title: String,
    pub art: Art,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Art {
    pub sources: Vec<ImageSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSource {
    pub url: String,
}

impl AudioItemMetadata {
    /// Metadata with a title and no artwork.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            art: Art::default(),
        }
    }
}

/// Accumulates speech and directives, then materialises an [`AlexaResponse`].
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    body: ResponseBody,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speak(mut self, text: &str) -> Self {
        self.body.output_speech = Some(OutputSpeech::ssml(text));
        self
    }

    /// Set reprompt speech. A reprompt keeps the session open.
    pub fn reprompt(mut self, text: &str) -> Self {
        self.body.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::ssml(text),
        });
        self.body.should_end_session = Some(false);
        self
    }

    pub fn add_audio_player_play_directive(
        mut self,
        play_behavior: PlayBehavior,
        url: &str,
        token: &str,
        offset_in_milliseconds: u64,
        expected_previous_token: Option<&str>,
        metadata: Option<AudioItemMetadata>,
    ) -> Self {
        self.body.directives.push(Directive::Play {
            play_behavior,
            audio_item: AudioItem {
                stream: Stream {
                    url: url.to_string(),
                    token: token.to_string(),
                    expected_previous_token: expected_previous_token.map(String::from),
                    offset_in_milliseconds,
                },
                metadata,
            },
        });
        self
    }

    pub fn add_audio_player_stop_directive(mut self) -> Self {
        self.body.directives.push(Directive::Stop);
        self
    }

    pub fn with_should_end_session(mut self, end: bool) -> Self {
        self.body.should_end_session = Some(end);
        self
    }

    pub fn build(self) -> AlexaResponse {
        AlexaResponse {
            version: "1.0".to_string(),
            response: self.body,
        }
    }
}

fn escape_ssml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

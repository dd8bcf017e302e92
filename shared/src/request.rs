//! Inbound Alexa request envelope.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Request envelope delivered by Alexa to the skill endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AlexaRequest {
    #[serde(default)]
    pub version: Option<String>,
    pub session: Option<Value>,
    pub context: Option<Context>,
    pub request: Request,
}

/// The request body, discriminated by its `type` tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    LaunchRequest,
    IntentRequest { intent: Intent },
    SessionEndedRequest {
        #[serde(default)]
        reason: Option<String>,
    },
    #[serde(rename = "AudioPlayer.PlaybackStarted")]
    PlaybackStarted,
    #[serde(rename = "AudioPlayer.PlaybackFinished")]
    PlaybackFinished,
    #[serde(rename = "AudioPlayer.PlaybackStopped")]
    PlaybackStopped,
    /// Any request type this skill does not register a handler for.
    #[serde(other)]
    Unknown,
}

/// Intent recognised by the interaction model.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub confirmation_status: Option<String>,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

/// Slot value extracted from the utterance.
#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Device context attached to every request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Context {
    #[serde(rename = "AudioPlayer")]
    pub audio_player: Option<AudioPlayerState>,
    #[serde(rename = "System")]
    pub system: Option<Value>,
}

/// Playback state reported by the device.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlayerState {
    pub token: Option<String>,
    pub offset_in_milliseconds: Option<u64>,
    pub player_activity: Option<String>,
}

impl AlexaRequest {
    /// Wire name of the request type.
    pub fn request_type(&self) -> &str {
        match &self.request {
            Request::LaunchRequest => "LaunchRequest",
            Request::IntentRequest { .. } => "IntentRequest",
            Request::SessionEndedRequest { .. } => "SessionEndedRequest",
            Request::PlaybackStarted => "AudioPlayer.PlaybackStarted",
            Request::PlaybackFinished => "AudioPlayer.PlaybackFinished",
            Request::PlaybackStopped => "AudioPlayer.PlaybackStopped",
            Request::Unknown => "Unknown",
        }
    }

    /// Intent name, for intent requests.
    pub fn intent_name(&self) -> Option<&str> {
        match &self.request {
            Request::IntentRequest { intent } => Some(intent.name.as_str()),
            _ => None,
        }
    }

    /// Whether this is an intent request for `name`.
    pub fn is_intent(&self, name: &str) -> bool {
        self.intent_name() == Some(name)
    }

    /// Non-empty value of the named slot.
    pub fn slot_value(&self, slot: &str) -> Option<&str> {
        match &self.request {
            Request::IntentRequest { intent } => intent
                .slots
                .get(slot)
                .and_then(|s| s.value.as_deref())
                .filter(|v| !v.is_empty()),
            _ => None,
        }
    }

    /// Token of the stream the device last played.
    pub fn audio_player_token(&self) -> Option<&str> {
        self.context
            .as_ref()
            .and_then(|c| c.audio_player.as_ref())
            .and_then(|a| a.token.as_deref())
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_intent_with_slot() {
        let json = r#"{
            "version": "1.0",
            "request": {
                "type": "IntentRequest",
                "requestId": "amzn1.echo-api.request.1",
                "intent": {
                    "name": "PlayStoryByNameIntent",
                    "confirmationStatus": "NONE",
                    "slots": {
                        "storyName": {"name": "storyName", "value": "The Brave Little Mouse"}
                    }
                }
            }
        }"#;
        let request: AlexaRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.request_type(), "IntentRequest");
        assert!(request.is_intent("PlayStoryByNameIntent"));
        assert_eq!(request.slot_value("storyName"), Some("The Brave Little Mouse"));
        assert_eq!(request.slot_value("missing"), None);
    }

    #[test]
    fn test_empty_slot_is_absent() {
        let json = r#"{"request": {"type": "IntentRequest", "intent": {
            "name": "PlayStoryByNameIntent",
            "slots": {"storyName": {"name": "storyName", "value": ""}}
        }}}"#;
        let request: AlexaRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.slot_value("storyName"), None);
    }

    #[test]
    fn test_audio_player_context() {
        let json = r#"{
            "context": {"AudioPlayer": {"token": "story-2026-01", "offsetInMilliseconds": 1200, "playerActivity": "PAUSED"}},
            "request": {"type": "AudioPlayer.PlaybackStopped", "token": "story-2026-01"}
        }"#;
        let request: AlexaRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(request.request, Request::PlaybackStopped));
        assert_eq!(request.audio_player_token(), Some("story-2026-01"));
        assert_eq!(request.intent_name(), None);
    }

    #[test]
    fn test_unregistered_type_is_unknown() {
        let json = r#"{"request": {"type": "AudioPlayer.PlaybackNearlyFinished"}}"#;
        let request: AlexaRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(request.request, Request::Unknown));
    }
}

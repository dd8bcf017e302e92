//! Request handlers. Each one turns a request into a finished response.

use shared::{
    AlexaRequest, AlexaResponse, AudioItemMetadata, PlayBehavior, ResponseBuilder, StoryMetadata,
};
use tracing::{error, info, warn};

use crate::AppState;

pub const FEED_UNAVAILABLE: &str =
    "I could not reach the latest story feed. Please try again later.";
pub const NO_RECORDING: &str =
    "I couldn't find a recording. Would you like me to read it instead?";
pub const HELP: &str =
    "You can say play latest story, play newest story, or play story by name.";
pub const FALLBACK: &str = "I did not understand that. You can say play latest story.";
pub const GOODBYE: &str = "Goodbye.";
pub const GENERIC_ERROR: &str = "Sorry, something went wrong.";

/// Slot carrying the story name the user asked for.
pub const STORY_NAME_SLOT: &str = "storyName";

/// A story with a recording that can be streamed.
struct Playable {
    story: StoryMetadata,
    audio_url: String,
}

/// Fetch the latest story, or the response to give when it can't be played.
async fn latest_playable(state: &AppState) -> Result<Playable, AlexaResponse> {
    let story = match state.stories.fetch_latest(&state.config).await {
        Ok(story) => story,
        Err(e) => {
            error!("Failed to fetch latest story: {}", e);
            return Err(ResponseBuilder::new().speak(FEED_UNAVAILABLE).build());
        }
    };

    let audio_url = story.playable_url().map(String::from);
    match audio_url {
        Some(audio_url) => Ok(Playable { story, audio_url }),
        None => {
            warn!(story_id = ?story.id, "Latest story has no audio_url");
            Err(ResponseBuilder::new()
                .speak(NO_RECORDING)
                .reprompt(NO_RECORDING)
                .build())
        }
    }
}

/// Speak `speech` and start streaming `playable` from the beginning.
fn play(speech: &str, playable: &Playable, token: &str) -> AlexaResponse {
    let title = playable.story.display_title();
    info!(token, title, "Starting playback");

    ResponseBuilder::new()
        .speak(speech)
        .add_audio_player_play_directive(
            PlayBehavior::ReplaceAll,
            &playable.audio_url,
            token,
            0,
            None,
            Some(AudioItemMetadata::titled(title)),
        )
        .build()
}

pub async fn launch(state: &AppState, request: &AlexaRequest) -> AlexaResponse {
    play_latest(state, request).await
}

pub async fn play_latest(state: &AppState, _request: &AlexaRequest) -> AlexaResponse {
    let playable = match latest_playable(state).await {
        Ok(playable) => playable,
        Err(response) => return response,
    };

    let speech = format!("Playing {}", playable.story.display_title());
    play(&speech, &playable, playable.story.stream_token())
}

/// Phrases the reply with the requested name but still plays the latest story.
pub async fn play_story_by_name(state: &AppState, request: &AlexaRequest) -> AlexaResponse {
    let playable = match latest_playable(state).await {
        Ok(playable) => playable,
        Err(response) => return response,
    };

    let name = request
        .slot_value(STORY_NAME_SLOT)
        .unwrap_or_else(|| playable.story.display_title());
    let speech = format!("Playing {}", name);
    play(&speech, &playable, playable.story.stream_token())
}

/// Replay the story, keeping the token the device already knows it by.
pub async fn repeat_one(state: &AppState, request: &AlexaRequest) -> AlexaResponse {
    let playable = match latest_playable(state).await {
        Ok(playable) => playable,
        Err(response) => return response,
    };

    let token = request
        .audio_player_token()
        .unwrap_or_else(|| playable.story.stream_token());
    let speech = format!("Replaying {}", playable.story.display_title());
    play(&speech, &playable, token)
}

pub async fn resume(state: &AppState, request: &AlexaRequest) -> AlexaResponse {
    repeat_one(state, request).await
}

pub fn help() -> AlexaResponse {
    ResponseBuilder::new().speak(HELP).reprompt(HELP).build()
}

pub fn cancel_and_stop() -> AlexaResponse {
    ResponseBuilder::new()
        .speak(GOODBYE)
        .add_audio_player_stop_directive()
        .build()
}

pub fn pause() -> AlexaResponse {
    ResponseBuilder::new()
        .add_audio_player_stop_directive()
        .build()
}

pub fn fallback() -> AlexaResponse {
    ResponseBuilder::new().speak(FALLBACK).reprompt(FALLBACK).build()
}

/// Empty acknowledgement for session and playback lifecycle events.
pub fn acknowledge() -> AlexaResponse {
    ResponseBuilder::new().build()
}

pub fn error() -> AlexaResponse {
    ResponseBuilder::new().speak(GENERIC_ERROR).build()
}

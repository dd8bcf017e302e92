//! Routes each request to the first registered handler that can handle it.

use shared::{AlexaRequest, AlexaResponse, Request};
use tracing::info;

use crate::handlers;
use crate::AppState;

pub const PLAY_LATEST_INTENT: &str = "PlayLatestIntent";
pub const PLAY_STORY_BY_NAME_INTENT: &str = "PlayStoryByNameIntent";
pub const REPEAT_ONE_INTENT: &str = "RepeatOneIntent";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const PAUSE_INTENT: &str = "AMAZON.PauseIntent";
pub const RESUME_INTENT: &str = "AMAZON.ResumeIntent";
pub const FALLBACK_INTENT: &str = "AMAZON.FallbackIntent";

/// Registered request handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestHandler {
    Launch,
    PlayLatest,
    PlayStoryByName,
    RepeatOne,
    Help,
    CancelAndStop,
    Pause,
    Resume,
    Fallback,
    SessionEnded,
    PlaybackStarted,
    PlaybackFinished,
    PlaybackStopped,
    /// Catch-all; matches every request.
    Error,
}

/// Registration order. The first handler whose predicate matches wins.
pub const HANDLERS: [RequestHandler; 14] = [
    RequestHandler::Launch,
    RequestHandler::PlayLatest,
    RequestHandler::PlayStoryByName,
    RequestHandler::RepeatOne,
    RequestHandler::Help,
    RequestHandler::CancelAndStop,
    RequestHandler::Pause,
    RequestHandler::Resume,
    RequestHandler::Fallback,
    RequestHandler::SessionEnded,
    RequestHandler::PlaybackStarted,
    RequestHandler::PlaybackFinished,
    RequestHandler::PlaybackStopped,
    RequestHandler::Error,
];

impl RequestHandler {
    pub fn can_handle(self, request: &AlexaRequest) -> bool {
        match self {
            Self::Launch => matches!(request.request, Request::LaunchRequest),
            Self::PlayLatest => request.is_intent(PLAY_LATEST_INTENT),
            Self::PlayStoryByName => request.is_intent(PLAY_STORY_BY_NAME_INTENT),
            Self::RepeatOne => request.is_intent(REPEAT_ONE_INTENT),
            Self::Help => request.is_intent(HELP_INTENT),
            Self::CancelAndStop => {
                request.is_intent(CANCEL_INTENT) || request.is_intent(STOP_INTENT)
            }
            Self::Pause => request.is_intent(PAUSE_INTENT),
            Self::Resume => request.is_intent(RESUME_INTENT),
            Self::Fallback => request.is_intent(FALLBACK_INTENT),
            Self::SessionEnded => matches!(request.request, Request::SessionEndedRequest { .. }),
            Self::PlaybackStarted => matches!(request.request, Request::PlaybackStarted),
            Self::PlaybackFinished => matches!(request.request, Request::PlaybackFinished),
            Self::PlaybackStopped => matches!(request.request, Request::PlaybackStopped),
            Self::Error => true,
        }
    }

    pub async fn handle(self, state: &AppState, request: &AlexaRequest) -> AlexaResponse {
        match self {
            Self::Launch => handlers::launch(state, request).await,
            Self::PlayLatest => handlers::play_latest(state, request).await,
            Self::PlayStoryByName => handlers::play_story_by_name(state, request).await,
            Self::RepeatOne => handlers::repeat_one(state, request).await,
            Self::Help => handlers::help(),
            Self::CancelAndStop => handlers::cancel_and_stop(),
            Self::Pause => handlers::pause(),
            Self::Resume => handlers::resume(state, request).await,
            Self::Fallback => handlers::fallback(),
            Self::SessionEnded
            | Self::PlaybackStarted
            | Self::PlaybackFinished
            | Self::PlaybackStopped => handlers::acknowledge(),
            Self::Error => handlers::error(),
        }
    }
}

/// Select the handler for a request.
pub fn route(request: &AlexaRequest) -> RequestHandler {
    HANDLERS
        .into_iter()
        .find(|handler| handler.can_handle(request))
        .unwrap_or(RequestHandler::Error)
}

/// Route a request and run the selected handler.
pub async fn dispatch(state: &AppState, request: &AlexaRequest) -> AlexaResponse {
    let handler = route(request);
    info!(
        request_type = request.request_type(),
        intent = request.intent_name(),
        handler = ?handler,
        "Dispatching request"
    );
    handler.handle(state, request).await
}

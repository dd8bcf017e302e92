//! Story Player Alexa Skill Lambda - Streams the latest recorded story.
//!
//! Alexa invokes this Lambda with skill requests. Each request is routed to a
//! single handler which may fetch the latest story metadata and answers with
//! speech and an AudioPlayer directive.

mod handlers;
mod router;

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use shared::{AlexaRequest, AlexaResponse, Config, StoryClient};
use std::sync::Arc;
use tracing::{error, info_span, warn, Instrument};
use tracing_subscriber::EnvFilter;

/// Application state
pub struct AppState {
    config: Config,
    stories: StoryClient,
}

impl AppState {
    fn new(config: Config) -> Self {
        Self {
            config,
            stories: StoryClient::new(reqwest::Client::new()),
        }
    }
}

/// Answer one raw Alexa envelope. Envelopes that do not parse get the
/// catch-all apology rather than a Lambda error.
async fn handle_event(state: &AppState, payload: Value) -> AlexaResponse {
    match serde_json::from_value::<AlexaRequest>(payload) {
        Ok(request) => router::dispatch(state, &request).await,
        Err(e) => {
            error!("Failed to parse Alexa request: {}", e);
            handlers::error()
        }
    }
}

async fn handler(state: Arc<AppState>, event: LambdaEvent<Value>) -> Result<AlexaResponse, Error> {
    let (payload, context) = event.into_parts();
    let span = info_span!("alexa_request", request_id = %context.request_id);

    Ok(handle_event(&state, payload).instrument(span).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env();
    if !config.has_story_source() {
        warn!("Neither S3_BUCKET nor STORY_FEED_BASE_URL is set; playback requests will fail");
    }

    let state = Arc::new(AppState::new(config));

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}

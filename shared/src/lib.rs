//! Shared library for the story player Lambda.
//!
//! This crate provides configuration, the latest story feed client and the Alexa
//! request/response envelope types used by the skill.

pub mod config;
pub mod error;
pub mod request;
pub mod response;
pub mod story;

pub use config::Config;
pub use error::{Error, Result};
pub use request::{AlexaRequest, AudioPlayerState, Context, Intent, Request, Slot};
pub use response::{AlexaResponse, AudioItemMetadata, Directive, PlayBehavior, ResponseBuilder};
pub use story::{StoryClient, StoryMetadata};

//! Shared error types for the services crate.

use thiserror::Error;

use journey_core::model::TopicId;

/// Errors emitted by `LiveTutorService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LiveTutorError {
    #[error("live tutor is not configured")]
    Disabled,
    #[error("live tutor returned an empty response")]
    EmptyResponse,
    #[error("live tutor request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("live tutor reply did not match the analysis shape: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors emitted by `LessonWorkflow` topic selection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerError {
    #[error("no topic with id {0}")]
    UnknownTopic(TopicId),
    #[error("topic {0} is still locked")]
    Locked(TopicId),
}

use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during RFQ operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RfqError {
    #[error("RFQ not found: {0}")]
    NotFound(String),
    #[error("RFQ validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RfqError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => RfqError::NotFound(id),
            FrameworkError::Rejected(msg) | FrameworkError::AlreadyExists(msg) => RfqError::ValidationError(msg),
            other => RfqError::ActorCommunicationError(other.to_string()),
        }
    }
}

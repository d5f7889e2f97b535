use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during admin account operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdminError {
    #[error("Admin already exists: {0}")]
    AlreadyExists(String),
    #[error("Admin validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for AdminError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::AlreadyExists(username) => AdminError::AlreadyExists(username),
            FrameworkError::Rejected(msg) => AdminError::ValidationError(msg),
            other => AdminError::ActorCommunicationError(other.to_string()),
        }
    }
}

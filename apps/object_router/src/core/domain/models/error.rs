use std::time::Duration;

use app_ring::RingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Cannot access storage instance {0}")]
    InstanceNotAccessible(String),

    #[error("No storage instance available")]
    NoAvailableNode,

    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Unknown instance: {0}")]
    UnknownInstance(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Backend call timed out after {0:?}")]
    Timeout(Duration),

    #[error("Discovery error: {0}")]
    Discovery(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RingError> for AppError {
    fn from(err: RingError) -> Self {
        match err {
            RingError::Empty => AppError::NoAvailableNode,
            RingError::InvalidCapacity => AppError::Config(err.to_string()),
        }
    }
}

impl From<BlobStoreError> for AppError {
    fn from(err: BlobStoreError) -> Self {
        match err {
            BlobStoreError::NotFound(id) => AppError::ObjectNotFound(id),
            other => AppError::Backend(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlobStoreError {
    #[error("object not found: {0}")]
    NotFound(String),

    #[error("bucket already exists: {0}")]
    BucketAlreadyExists(String),

    #[error("instance unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventSourceError {
    #[error("instance not found: {0}")]
    NotFound(String),

    #[error("event subscriber lagged, {0} events dropped")]
    Lagged(u64),

    #[error("event source unavailable: {0}")]
    Unavailable(String),
}

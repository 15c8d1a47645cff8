use std::{str::FromStr, sync::Arc};

use app_ring::Node;

use crate::core::domain::{models::AppError, services::BlobStore};

pub type BackendNode = Node<Arc<dyn BlobStore>>;

/// What a stop event does to the ring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopPolicy {
    /// Delete the node; its keys fall to the ring successor.
    #[default]
    Remove,
    /// Keep the node in place but mark it unavailable.
    Stop,
}

impl FromStr for StopPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remove" => Ok(StopPolicy::Remove),
            "stop" => Ok(StopPolicy::Stop),
            other => Err(AppError::Config(format!("unknown stop policy: {other}"))),
        }
    }
}

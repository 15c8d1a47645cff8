use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

use crate::core::domain::models::AppError;

pub const USER_ENV: &str = "MINIO_ROOT_USER";
pub const PASSWORD_ENV: &str = "MINIO_ROOT_PASSWORD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceDescriptor {
    pub instance_ref: String,
    pub name: String,
}

/// Runtime view of a backend instance as reported by the event source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceDetails {
    pub name: String,
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub env: HashMap<String, String>,
    #[serde(default)]
    pub network_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Start,
    Stop,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleEvent {
    pub kind: EventKind,
    pub instance_ref: String,
}

impl LifecycleEvent {
    #[inline]
    pub fn new(kind: EventKind, instance_ref: impl Into<String>) -> Self {
        Self {
            kind,
            instance_ref: instance_ref.into(),
        }
    }
}

/// Connection details needed to reach one storage instance.
#[derive(Clone, PartialEq, Eq)]
pub struct InstanceInfo {
    /// `address:port`, also the node's name on the ring.
    pub host: String,
    pub user: String,
    pub password: String,
}

impl InstanceInfo {
    pub fn extract(details: &InstanceDetails, port: u16) -> Result<Self, AppError> {
        if !details.running {
            return Err(AppError::Discovery(format!(
                "instance {} is not running",
                details.name
            )));
        }

        let user = env_value(&details.env, USER_ENV)?;
        let password = env_value(&details.env, PASSWORD_ENV)?;
        let host = Self::host_of(details, port).ok_or_else(|| {
            AppError::Discovery(format!("instance {} has no IP address", details.name))
        })?;

        Ok(Self {
            host,
            user,
            password,
        })
    }

    pub fn host_of(details: &InstanceDetails, port: u16) -> Option<String> {
        details
            .network_address
            .as_deref()
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .map(|address| format!("{address}:{port}"))
    }
}

impl fmt::Debug for InstanceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceInfo")
            .field("host", &self.host)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

fn env_value(env: &HashMap<String, String>, key: &str) -> Result<String, AppError> {
    env.get(key)
        .filter(|value| !value.is_empty())
        .cloned()
        .ok_or_else(|| AppError::Discovery(format!("{key} environment variable not set")))
}

use std::{env, str::FromStr, time::Duration};

use app_ring::DEFAULT_RING_SIZE;

use crate::{
    core::{
        domain::models::{AppError, StopPolicy},
        services::WatcherConfig,
    },
    infrastructure::adapters::services::sigv4::DEFAULT_REGION,
};

pub const DEFAULT_HTTP_PORT: u16 = 3000;
pub const DEFAULT_INSTANCE_PORT: u16 = 9000;
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_INSTANCE_PREFIX: &str = "amazin-object-storage";
pub const DEFAULT_BACKOFF_MS: u64 = 500;
pub const DEFAULT_BACKOFF_MAX_MS: u64 = 30_000;

/// Where node handles send object traffic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlobBackend {
    /// SigV4-signed S3 API on each instance.
    #[default]
    S3,
    Memory,
}

impl FromStr for BlobBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s3" => Ok(BlobBackend::S3),
            "memory" => Ok(BlobBackend::Memory),
            other => Err(AppError::Config(format!("unknown blob backend: {other}"))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bucket: String,
    pub http_port: u16,
    pub instance_port: u16,
    pub request_timeout: Duration,
    pub ring_size: u64,
    pub instance_prefix: String,
    pub stop_policy: StopPolicy,
    pub backoff_initial: Duration,
    pub backoff_max: Duration,
    pub blob_backend: BlobBackend,
    pub s3_region: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bucket = lookup("BUCKET")
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .ok_or_else(|| AppError::Config("BUCKET not set".into()))?;

        let backoff_initial = Duration::from_millis(parse_or(
            &lookup,
            "WATCH_BACKOFF_MS",
            DEFAULT_BACKOFF_MS,
        )?);
        let backoff_max = Duration::from_millis(parse_or(
            &lookup,
            "WATCH_BACKOFF_MAX_MS",
            DEFAULT_BACKOFF_MAX_MS,
        )?);

        if backoff_initial.is_zero() || backoff_max < backoff_initial {
            return Err(AppError::Config(format!(
                "invalid watch backoff: initial {backoff_initial:?}, max {backoff_max:?}"
            )));
        }

        let ring_size = parse_or(&lookup, "RING_SIZE", DEFAULT_RING_SIZE)?;
        if ring_size == 0 {
            return Err(AppError::Config("RING_SIZE must be positive".into()));
        }

        Ok(Self {
            bucket,
            http_port: parse_or(&lookup, "HTTP_PORT", DEFAULT_HTTP_PORT)?,
            instance_port: parse_or(&lookup, "INSTANCE_PORT", DEFAULT_INSTANCE_PORT)?,
            request_timeout: Duration::from_millis(parse_or(
                &lookup,
                "TIMEOUT",
                DEFAULT_TIMEOUT_MS,
            )?),
            ring_size,
            instance_prefix: lookup("INSTANCE_PREFIX")
                .unwrap_or_else(|| DEFAULT_INSTANCE_PREFIX.to_string()),
            stop_policy: parse_or(&lookup, "STOP_POLICY", StopPolicy::default())?,
            backoff_initial,
            backoff_max,
            blob_backend: parse_or(&lookup, "BLOB_BACKEND", BlobBackend::default())?,
            s3_region: lookup("S3_REGION")
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
        })
    }

    pub fn watcher_config(&self) -> WatcherConfig {
        WatcherConfig {
            instance_prefix: self.instance_prefix.clone(),
            instance_port: self.instance_port,
            stop_policy: self.stop_policy,
            backoff_initial: self.backoff_initial,
            backoff_max: self.backoff_max,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key).map(|v| v.trim().to_string()) {
        None => Ok(default),
        Some(v) if v.is_empty() => Ok(default),
        Some(v) => v
            .parse()
            .map_err(|e| AppError::Config(format!("invalid {key}={v}: {e}"))),
    }
}

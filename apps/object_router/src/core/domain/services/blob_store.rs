use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::core::domain::models::{BlobStoreError, InstanceInfo};

/// Object operations against one storage instance.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn get(&self, bucket: &str, id: &str) -> Result<Bytes, BlobStoreError>;

    async fn put(&self, bucket: &str, id: &str, body: Bytes) -> Result<(), BlobStoreError>;

    /// Creates the bucket. An existing bucket is reported as
    /// `BlobStoreError::BucketAlreadyExists`.
    async fn ensure_bucket(&self, bucket: &str) -> Result<(), BlobStoreError>;
}

pub trait BlobStoreFactory: Send + Sync {
    fn connect(&self, instance: &InstanceInfo) -> Result<Arc<dyn BlobStore>, BlobStoreError>;
}

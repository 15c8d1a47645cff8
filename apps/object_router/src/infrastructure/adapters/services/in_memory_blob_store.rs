use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::{DashMap, mapref::entry::Entry};

use crate::core::domain::{
    models::{BlobStoreError, InstanceInfo},
    services::{BlobStore, BlobStoreFactory},
};

/// Process-local object store, one per simulated instance.
pub struct InMemoryBlobStore {
    buckets: DashMap<Arc<str>, DashMap<String, Bytes>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self {
            buckets: DashMap::new(),
        }
    }

    pub fn object_count(&self, bucket: &str) -> usize {
        self.buckets.get(bucket).map(|b| b.len()).unwrap_or_default()
    }
}

impl Default for InMemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn get(&self, bucket: &str, id: &str) -> Result<Bytes, BlobStoreError> {
        let objects = self
            .buckets
            .get(bucket)
            .ok_or_else(|| BlobStoreError::Backend(format!("no such bucket: {bucket}")))?;

        objects
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| BlobStoreError::NotFound(id.to_string()))
    }

    async fn put(&self, bucket: &str, id: &str, body: Bytes) -> Result<(), BlobStoreError> {
        let objects = self
            .buckets
            .get(bucket)
            .ok_or_else(|| BlobStoreError::Backend(format!("no such bucket: {bucket}")))?;

        objects.insert(id.to_string(), body);
        Ok(())
    }

    async fn ensure_bucket(&self, bucket: &str) -> Result<(), BlobStoreError> {
        match self.buckets.entry(Arc::<str>::from(bucket)) {
            Entry::Occupied(_) => Err(BlobStoreError::BucketAlreadyExists(bucket.to_string())),
            Entry::Vacant(v) => {
                v.insert(DashMap::new());
                Ok(())
            }
        }
    }
}

/// Hands out one store per host and keeps it, so an instance that restarts
/// finds its objects again.
pub struct InMemoryBlobStoreFactory {
    stores: DashMap<String, Arc<InMemoryBlobStore>>,
}

impl InMemoryBlobStoreFactory {
    pub fn new() -> Self {
        Self {
            stores: DashMap::new(),
        }
    }

    pub fn store(&self, host: &str) -> Option<Arc<InMemoryBlobStore>> {
        self.stores.get(host).map(|s| s.value().clone())
    }
}

impl Default for InMemoryBlobStoreFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl BlobStoreFactory for InMemoryBlobStoreFactory {
    fn connect(&self, instance: &InstanceInfo) -> Result<Arc<dyn BlobStore>, BlobStoreError> {
        let store = self
            .stores
            .entry(instance.host.clone())
            .or_insert_with(|| Arc::new(InMemoryBlobStore::new()))
            .value()
            .clone();

        Ok(store)
    }
}

pub mod hash_ring_node_provider;
pub mod in_memory_blob_store;
pub mod instance_registry;
pub mod s3_blob_store;
pub mod sigv4;

pub use hash_ring_node_provider::HashRingNodeProvider;
pub use in_memory_blob_store::{InMemoryBlobStore, InMemoryBlobStoreFactory};
pub use instance_registry::InstanceRegistry;
pub use s3_blob_store::{S3BlobStore, S3BlobStoreFactory};

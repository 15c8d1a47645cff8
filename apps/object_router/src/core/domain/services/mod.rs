pub mod blob_store;
pub mod event_source;
pub mod node_provider;

pub use blob_store::{BlobStore, BlobStoreFactory};
pub use event_source::{EventSource, EventSubscription};
pub use node_provider::NodeProvider;

pub mod error;
pub mod instance;
pub mod node;
pub mod usecases;

pub use error::{AppError, BlobStoreError, EventSourceError};
pub use instance::{EventKind, InstanceDescriptor, InstanceDetails, InstanceInfo, LifecycleEvent};
pub use node::{BackendNode, StopPolicy};

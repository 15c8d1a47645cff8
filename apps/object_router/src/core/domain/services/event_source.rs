use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::core::domain::models::{
    EventSourceError, InstanceDescriptor, InstanceDetails, LifecycleEvent,
};

/// Live lifecycle stream. The subscription is over once `events` yields `None`.
pub struct EventSubscription {
    pub events: mpsc::Receiver<LifecycleEvent>,
    pub errors: mpsc::Receiver<EventSourceError>,
}

#[async_trait]
pub trait EventSource: Send + Sync {
    async fn list_running(
        &self,
        name_prefix: &str,
    ) -> Result<Vec<InstanceDescriptor>, EventSourceError>;

    async fn subscribe(&self) -> Result<EventSubscription, EventSourceError>;

    async fn inspect(&self, instance_ref: &str) -> Result<InstanceDetails, EventSourceError>;
}

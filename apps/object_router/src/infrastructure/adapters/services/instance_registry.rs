use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use crate::core::domain::{
    models::{EventKind, EventSourceError, InstanceDescriptor, InstanceDetails, LifecycleEvent},
    services::{EventSource, EventSubscription},
};

const SUBSCRIPTION_BUFFER: usize = 64;

/// In-process instance table. Instances are announced through the admin API
/// and every change is broadcast to the active subscribers.
pub struct InstanceRegistry {
    instances: DashMap<String, InstanceDetails>,
    events: broadcast::Sender<LifecycleEvent>,
}

impl InstanceRegistry {
    pub fn new(capacity: usize) -> Self {
        let (events, _) = broadcast::channel(capacity.max(1));

        Self {
            instances: DashMap::new(),
            events,
        }
    }

    /// Records the instance and emits a start event when it is running.
    pub fn register(&self, instance_ref: &str, details: InstanceDetails) {
        let running = details.running;
        info!(%instance_ref, name = %details.name, running, "instance registered");

        self.instances.insert(instance_ref.to_string(), details);

        if running {
            self.publish(EventKind::Start, instance_ref);
        }
    }

    /// Forgets the instance and emits a stop event for it.
    pub fn deregister(&self, instance_ref: &str) -> bool {
        if self.instances.remove(instance_ref).is_none() {
            return false;
        }

        info!(%instance_ref, "instance stopped");
        self.publish(EventKind::Stop, instance_ref);

        true
    }

    pub fn subscriber_count(&self) -> usize {
        self.events.receiver_count()
    }

    fn publish(&self, kind: EventKind, instance_ref: &str) {
        // no subscriber yet: discovery picks the instance up later
        if self
            .events
            .send(LifecycleEvent::new(kind, instance_ref))
            .is_err()
        {
            debug!(%instance_ref, "no lifecycle subscribers");
        }
    }
}

#[async_trait]
impl EventSource for InstanceRegistry {
    async fn list_running(
        &self,
        name_prefix: &str,
    ) -> Result<Vec<InstanceDescriptor>, EventSourceError> {
        let mut instances: Vec<InstanceDescriptor> = self
            .instances
            .iter()
            .filter(|entry| entry.running && entry.name.starts_with(name_prefix))
            .map(|entry| InstanceDescriptor {
                instance_ref: entry.key().clone(),
                name: entry.name.clone(),
            })
            .collect();
        instances.sort_by(|a, b| a.instance_ref.cmp(&b.instance_ref));

        Ok(instances)
    }

    async fn subscribe(&self) -> Result<EventSubscription, EventSourceError> {
        let mut source = self.events.subscribe();
        let (event_tx, events) = mpsc::channel(SUBSCRIPTION_BUFFER);
        let (error_tx, errors) = mpsc::channel(SUBSCRIPTION_BUFFER);

        tokio::spawn(async move {
            loop {
                match source.recv().await {
                    Ok(event) => {
                        if event_tx.send(event).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        if error_tx
                            .send(EventSourceError::Lagged(skipped))
                            .await
                            .is_err()
                        {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        Ok(EventSubscription { events, errors })
    }

    async fn inspect(&self, instance_ref: &str) -> Result<InstanceDetails, EventSourceError> {
        self.instances
            .get(instance_ref)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| EventSourceError::NotFound(instance_ref.to_string()))
    }
}

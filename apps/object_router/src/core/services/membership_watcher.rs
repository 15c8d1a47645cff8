use std::{collections::HashSet, sync::Arc, time::Duration};

use app_core::UseCaseValidatable;
use app_ring::AddOutcome;
use dashmap::DashMap;
use tokio::sync::watch;
use tracing::{debug, error, info, trace, warn};

use crate::core::{
    domain::{
        models::{
            AppError, EventKind, EventSourceError, InstanceInfo, LifecycleEvent, StopPolicy,
            usecases::{AssignNodeUseCaseInput, RemoveNodeUseCaseInput},
        },
        services::{EventSource, EventSubscription},
    },
    usecases::{AssignNodeUseCase, RemoveNodeUseCase},
};

#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// Only instances whose name starts with this prefix are storage backends.
    pub instance_prefix: String,
    pub instance_port: u16,
    pub stop_policy: StopPolicy,
    pub backoff_initial: Duration,
    pub backoff_max: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchExit {
    Shutdown,
    StreamEnded,
}

/// Keeps the ring in line with the running storage instances.
///
/// A single task owns the watcher, so ring mutations coming from lifecycle
/// events are applied one at a time. After the event stream drops, or the
/// source reports dropped events, discovery runs again and reconciles the
/// ring with the instances that are actually running.
pub struct MembershipWatcher {
    event_source: Arc<dyn EventSource>,
    assign_node_use_case: Arc<AssignNodeUseCase>,
    remove_node_use_case: Arc<RemoveNodeUseCase>,
    config: WatcherConfig,
    // instance_ref -> ring name, so stop events resolve even without an address
    known: DashMap<String, String>,
}

impl MembershipWatcher {
    pub fn new(
        event_source: Arc<dyn EventSource>,
        assign_node_use_case: Arc<AssignNodeUseCase>,
        remove_node_use_case: Arc<RemoveNodeUseCase>,
        config: WatcherConfig,
    ) -> Self {
        Self {
            event_source,
            assign_node_use_case,
            remove_node_use_case,
            config,
            known: DashMap::new(),
        }
    }

    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        info!("membership watcher started");

        self.discover_instances().await;

        let mut backoff = self.config.backoff_initial;
        let mut reconnecting = false;

        loop {
            if *shutdown.borrow() {
                break;
            }

            match self.event_source.subscribe().await {
                Ok(subscription) => {
                    if reconnecting {
                        info!("resubscribed to lifecycle events, running discovery again");
                        self.discover_instances().await;
                    }
                    backoff = self.config.backoff_initial;

                    if self.watch(subscription, &mut shutdown).await == WatchExit::Shutdown {
                        break;
                    }
                    warn!("lifecycle event stream ended");
                }
                Err(e) => error!(error = %e, "failed to subscribe to lifecycle events"),
            }

            reconnecting = true;
            debug!(?backoff, "waiting before resubscribing");

            tokio::select! {
                _ = tokio::time::sleep(backoff) => {}
                _ = shutdown.changed() => break,
            }

            backoff = (backoff * 2).min(self.config.backoff_max);
        }

        info!("membership watcher stopped");
    }

    /// Reconciles the ring with the running instances that match the prefix.
    ///
    /// Instances tracked by the watcher that are no longer running are taken
    /// out under the stop policy; every running one is (re)assigned. Instances
    /// that cannot be inspected or lack connection details are skipped. A
    /// failed listing changes nothing.
    pub async fn discover_instances(&self) -> usize {
        let instances = match self
            .event_source
            .list_running(&self.config.instance_prefix)
            .await
        {
            Ok(instances) => instances,
            Err(e) => {
                error!(error = %e, "error discovering instances");
                return 0;
            }
        };

        {
            let running: HashSet<&str> = instances
                .iter()
                .map(|instance| instance.instance_ref.as_str())
                .collect();
            self.retire_missing(&running).await;
        }

        let mut added = 0;

        for instance in instances {
            let details = match self.event_source.inspect(&instance.instance_ref).await {
                Ok(details) => details,
                Err(e) => {
                    error!(instance = %instance.name, error = %e, "error inspecting instance");
                    continue;
                }
            };

            let info = match InstanceInfo::extract(&details, self.config.instance_port) {
                Ok(info) => info,
                Err(e) => {
                    error!(instance = %instance.name, error = %e, "error getting instance information");
                    continue;
                }
            };

            if self.register(&instance.instance_ref, info).await {
                added += 1;
            }
        }

        info!(added, "instance discovery finished");

        added
    }

    /// Consumes one subscription until it ends or shutdown is requested.
    pub async fn watch(
        &self,
        subscription: EventSubscription,
        shutdown: &mut watch::Receiver<bool>,
    ) -> WatchExit {
        let EventSubscription {
            mut events,
            mut errors,
        } = subscription;
        let mut errors_open = true;

        loop {
            tokio::select! {
                biased;

                _ = shutdown.changed() => return WatchExit::Shutdown,
                event = events.recv() => match event {
                    Some(event) => self.handle_event(event).await,
                    None => return WatchExit::StreamEnded,
                },
                err = errors.recv(), if errors_open => match err {
                    Some(EventSourceError::Lagged(missed)) => {
                        warn!(missed, "lifecycle events dropped, reconciling ring");
                        self.discover_instances().await;
                    }
                    Some(e) => error!(error = %e, "event source error"),
                    None => errors_open = false,
                },
            }
        }
    }

    pub async fn handle_event(&self, event: LifecycleEvent) {
        match event.kind {
            EventKind::Start => self.handle_start(&event.instance_ref).await,
            EventKind::Stop => self.handle_stop(&event.instance_ref).await,
            EventKind::Other(action) => {
                trace!(%action, instance = %event.instance_ref, "ignoring event")
            }
        }
    }

    async fn handle_start(&self, instance_ref: &str) {
        let details = match self.event_source.inspect(instance_ref).await {
            Ok(details) => details,
            Err(e) => {
                error!(%instance_ref, error = %e, "error inspecting instance");
                return;
            }
        };

        if !details.name.starts_with(&self.config.instance_prefix) {
            trace!(%instance_ref, name = %details.name, "not a storage instance");
            return;
        }

        match InstanceInfo::extract(&details, self.config.instance_port) {
            Ok(info) => {
                self.register(instance_ref, info).await;
            }
            Err(e) => error!(%instance_ref, error = %e, "error extracting instance info"),
        }
    }

    async fn handle_stop(&self, instance_ref: &str) {
        let Some(node_id) = self.resolve_stopped(instance_ref).await else {
            debug!(%instance_ref, "stop event for unknown instance");
            return;
        };

        self.retire(instance_ref, node_id).await;
    }

    async fn retire_missing(&self, running: &HashSet<&str>) {
        let missing: Vec<(String, String)> = self
            .known
            .iter()
            .filter(|entry| !running.contains(entry.key().as_str()))
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();

        for (instance_ref, node_id) in missing {
            self.known.remove(&instance_ref);
            info!(%instance_ref, %node_id, "instance no longer running");
            self.retire(&instance_ref, node_id).await;
        }
    }

    async fn retire(&self, instance_ref: &str, node_id: String) {
        let input = RemoveNodeUseCaseInput {
            node_id,
            policy: self.config.stop_policy,
        };

        if let Err(e) = self.remove_node_use_case.validate_and_execute(input).await {
            error!(%instance_ref, error = %e, "error removing node");
        }
    }

    async fn resolve_stopped(&self, instance_ref: &str) -> Option<String> {
        if let Some((_, node_id)) = self.known.remove(instance_ref) {
            return Some(node_id);
        }

        match self.event_source.inspect(instance_ref).await {
            Ok(details) => InstanceInfo::host_of(&details, self.config.instance_port),
            Err(e) => {
                error!(%instance_ref, error = %e, "error inspecting instance");
                None
            }
        }
    }

    async fn register(&self, instance_ref: &str, instance: InstanceInfo) -> bool {
        let host = instance.host.clone();

        let previous = self.known.get(instance_ref).map(|entry| entry.value().clone());
        if let Some(previous) = previous.filter(|previous| *previous != host) {
            info!(%instance_ref, %previous, %host, "instance changed address");
            self.known.remove(instance_ref);
            self.retire(instance_ref, previous).await;
        }

        match self.assign(instance).await {
            Ok(AddOutcome::Collision { .. }) => false,
            Ok(_) => {
                self.known.insert(instance_ref.to_string(), host);
                true
            }
            Err(e) => {
                error!(%instance_ref, %host, error = %e, "error adding node");
                false
            }
        }
    }

    async fn assign(&self, instance: InstanceInfo) -> Result<AddOutcome, AppError> {
        let output = self
            .assign_node_use_case
            .validate_and_execute(AssignNodeUseCaseInput { instance })
            .await?;

        Ok(output.outcome)
    }
}

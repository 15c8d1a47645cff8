use std::{sync::Arc, time::Duration};

use crate::{
    core::{
        domain::{
            models::AppError,
            services::{BlobStoreFactory, EventSource, NodeProvider},
        },
        services::{MembershipWatcher, RoutingService},
        usecases::{AssignNodeUseCase, GetObjectUseCase, PutObjectUseCase, RemoveNodeUseCase},
    },
    infrastructure::{
        adapters::services::{HashRingNodeProvider, InstanceRegistry},
        app_state::AppState,
        config::AppConfig,
    },
};

pub struct ObjectRouterModule {
    pub node_provider: Arc<dyn NodeProvider>,
    pub routing_service: Arc<RoutingService>,
    pub membership_watcher: Arc<MembershipWatcher>,
    pub request_timeout: Duration,
}

impl ObjectRouterModule {
    pub fn build(
        config: &AppConfig,
        event_source: Arc<dyn EventSource>,
        blob_store_factory: Arc<dyn BlobStoreFactory>,
    ) -> Result<Self, AppError> {
        let node_provider: Arc<dyn NodeProvider> =
            HashRingNodeProvider::new_shared(config.ring_size)?;
        let bucket: Arc<str> = Arc::from(config.bucket.as_str());

        let assign_node_use_case = Arc::new(AssignNodeUseCase::new(
            node_provider.clone(),
            blob_store_factory,
            bucket.clone(),
        ));
        let remove_node_use_case = Arc::new(RemoveNodeUseCase::new(node_provider.clone()));
        let get_object_use_case = Arc::new(GetObjectUseCase::new(
            node_provider.clone(),
            bucket.clone(),
        ));
        let put_object_use_case = Arc::new(PutObjectUseCase::new(node_provider.clone(), bucket));

        let routing_service = Arc::new(RoutingService::new(
            get_object_use_case,
            put_object_use_case,
        ));

        let membership_watcher = Arc::new(MembershipWatcher::new(
            event_source,
            assign_node_use_case,
            remove_node_use_case,
            config.watcher_config(),
        ));

        Ok(Self {
            node_provider,
            routing_service,
            membership_watcher,
            request_timeout: config.request_timeout,
        })
    }

    pub fn app_state(&self, registry: Arc<InstanceRegistry>) -> AppState {
        AppState {
            routing_service: self.routing_service.clone(),
            node_provider: self.node_provider.clone(),
            registry,
            request_timeout: self.request_timeout,
        }
    }
}

use std::{sync::Arc, time::Duration};

use crate::{
    core::{domain::services::NodeProvider, services::RoutingService},
    infrastructure::adapters::services::InstanceRegistry,
};

#[derive(Clone)]
pub struct AppState {
    pub routing_service: Arc<RoutingService>,
    pub node_provider: Arc<dyn NodeProvider>,
    pub registry: Arc<InstanceRegistry>,
    pub request_timeout: Duration,
}

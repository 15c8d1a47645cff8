use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::core::domain::{
    models::{
        AppError, StopPolicy,
        usecases::{RemoveNodeUseCaseInput, RemoveNodeUseCaseOutput},
    },
    services::NodeProvider,
};

pub struct RemoveNodeUseCase {
    node_provider: Arc<dyn NodeProvider>,
}

impl RemoveNodeUseCase {
    pub fn new(node_provider: Arc<dyn NodeProvider>) -> Self {
        Self { node_provider }
    }
}

#[async_trait]
impl UseCase<RemoveNodeUseCaseInput, RemoveNodeUseCaseOutput, AppError> for RemoveNodeUseCase {
    async fn execute(
        &self,
        input: RemoveNodeUseCaseInput,
    ) -> Result<RemoveNodeUseCaseOutput, AppError> {
        let node_id = input.node_id.as_str();

        let success = match input.policy {
            StopPolicy::Remove => self.node_provider.remove_node(node_id),
            StopPolicy::Stop => self.node_provider.stop_node(node_id),
        };

        if success {
            info!(%node_id, policy = ?input.policy, "node taken out of service");
        } else {
            debug!(%node_id, "node not on ring, nothing to do");
        }

        Ok(RemoveNodeUseCaseOutput { success })
    }
}

#[async_trait]
impl UseCaseValidatable<RemoveNodeUseCaseInput, RemoveNodeUseCaseOutput, AppError>
    for RemoveNodeUseCase
{
    async fn validate(&self, input: &RemoveNodeUseCaseInput) -> Result<(), AppError> {
        if input.node_id.is_empty() {
            return Err(AppError::BadRequest("Node id is empty".to_string()));
        }

        Ok(())
    }
}

use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable};
use async_trait::async_trait;
use tokio::time::timeout;
use tracing::trace;

use crate::core::domain::{
    models::{
        AppError,
        usecases::{GetObjectUseCaseInput, GetObjectUseCaseOutput},
    },
    services::NodeProvider,
};

pub struct GetObjectUseCase {
    node_provider: Arc<dyn NodeProvider>,
    bucket: Arc<str>,
}

impl GetObjectUseCase {
    pub fn new(node_provider: Arc<dyn NodeProvider>, bucket: Arc<str>) -> Self {
        Self {
            node_provider,
            bucket,
        }
    }
}

#[async_trait]
impl UseCase<GetObjectUseCaseInput, GetObjectUseCaseOutput, AppError> for GetObjectUseCase {
    async fn execute(
        &self,
        input: GetObjectUseCaseInput,
    ) -> Result<GetObjectUseCaseOutput, AppError> {
        let node = self.node_provider.pick_node(&input.id)?;
        trace!(id = %input.id, node = %node.name, "routing GET");

        if node.is_stopped() {
            return Err(AppError::InstanceNotAccessible(node.name.to_string()));
        }

        let body = timeout(input.timeout, node.client.get(&self.bucket, &input.id))
            .await
            .map_err(|_| AppError::Timeout(input.timeout))??;

        Ok(GetObjectUseCaseOutput { body })
    }
}

#[async_trait]
impl UseCaseValidatable<GetObjectUseCaseInput, GetObjectUseCaseOutput, AppError>
    for GetObjectUseCase
{
    async fn validate(&self, input: &GetObjectUseCaseInput) -> Result<(), AppError> {
        if input.id.is_empty() {
            return Err(AppError::BadRequest("Object id is empty".to_string()));
        }

        Ok(())
    }
}

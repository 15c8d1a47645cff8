use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable};
use async_trait::async_trait;
use tokio::time::timeout;
use tracing::trace;

use crate::core::domain::{
    models::{
        AppError,
        usecases::{PutObjectUseCaseInput, PutObjectUseCaseOutput},
    },
    services::NodeProvider,
};

pub struct PutObjectUseCase {
    node_provider: Arc<dyn NodeProvider>,
    bucket: Arc<str>,
}

impl PutObjectUseCase {
    pub fn new(node_provider: Arc<dyn NodeProvider>, bucket: Arc<str>) -> Self {
        Self {
            node_provider,
            bucket,
        }
    }
}

#[async_trait]
impl UseCase<PutObjectUseCaseInput, PutObjectUseCaseOutput, AppError> for PutObjectUseCase {
    async fn execute(
        &self,
        input: PutObjectUseCaseInput,
    ) -> Result<PutObjectUseCaseOutput, AppError> {
        let node = self.node_provider.pick_node(&input.id)?;
        trace!(id = %input.id, node = %node.name, size = input.body.len(), "routing PUT");

        if node.is_stopped() {
            return Err(AppError::InstanceNotAccessible(node.name.to_string()));
        }

        timeout(
            input.timeout,
            node.client.put(&self.bucket, &input.id, input.body),
        )
        .await
        .map_err(|_| AppError::Timeout(input.timeout))??;

        Ok(PutObjectUseCaseOutput { node_id: node.name })
    }
}

#[async_trait]
impl UseCaseValidatable<PutObjectUseCaseInput, PutObjectUseCaseOutput, AppError>
    for PutObjectUseCase
{
    async fn validate(&self, input: &PutObjectUseCaseInput) -> Result<(), AppError> {
        if input.id.is_empty() {
            return Err(AppError::BadRequest("Object id is empty".to_string()));
        }

        Ok(())
    }
}

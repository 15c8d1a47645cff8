use std::sync::Arc;

use app_core::{UseCase, UseCaseValidatable};
use app_ring::{AddOutcome, Node};
use async_trait::async_trait;
use tracing::{info, warn};

use crate::core::domain::{
    models::{
        AppError, BlobStoreError,
        usecases::{AssignNodeUseCaseInput, AssignNodeUseCaseOutput},
    },
    services::{BlobStore, BlobStoreFactory, NodeProvider},
};

/// Connects to a storage instance, makes sure its bucket exists and places it
/// on the ring.
pub struct AssignNodeUseCase {
    node_provider: Arc<dyn NodeProvider>,
    blob_store_factory: Arc<dyn BlobStoreFactory>,
    bucket: Arc<str>,
}

impl AssignNodeUseCase {
    pub fn new(
        node_provider: Arc<dyn NodeProvider>,
        blob_store_factory: Arc<dyn BlobStoreFactory>,
        bucket: Arc<str>,
    ) -> Self {
        Self {
            node_provider,
            blob_store_factory,
            bucket,
        }
    }

    async fn provision_bucket(&self, host: &str, client: &dyn BlobStore) {
        match client.ensure_bucket(&self.bucket).await {
            Ok(()) => info!(%host, bucket = %self.bucket, "created bucket"),
            Err(BlobStoreError::BucketAlreadyExists(_)) => {
                info!(%host, bucket = %self.bucket, "bucket already exists")
            }
            Err(e) => warn!(%host, bucket = %self.bucket, error = %e, "failed to provision bucket"),
        }
    }
}

#[async_trait]
impl UseCase<AssignNodeUseCaseInput, AssignNodeUseCaseOutput, AppError> for AssignNodeUseCase {
    async fn execute(
        &self,
        input: AssignNodeUseCaseInput,
    ) -> Result<AssignNodeUseCaseOutput, AppError> {
        let host = input.instance.host.clone();

        let client = self
            .blob_store_factory
            .connect(&input.instance)
            .map_err(|e| AppError::Backend(format!("cannot connect to {host}: {e}")))?;

        self.provision_bucket(&host, client.as_ref()).await;

        let (position, outcome) = self.node_provider.add_node(Node::new(host.as_str(), client));

        match &outcome {
            AddOutcome::Inserted => info!(%host, position, "node added to ring"),
            AddOutcome::Reactivated => info!(%host, position, "node reactivated"),
            AddOutcome::Collision { occupant } => warn!(
                %host,
                position,
                %occupant,
                "ring position already taken by another node, instance not added"
            ),
        }

        Ok(AssignNodeUseCaseOutput { position, outcome })
    }
}

#[async_trait]
impl UseCaseValidatable<AssignNodeUseCaseInput, AssignNodeUseCaseOutput, AppError>
    for AssignNodeUseCase
{
    async fn validate(&self, input: &AssignNodeUseCaseInput) -> Result<(), AppError> {
        if input.instance.host.is_empty() {
            return Err(AppError::BadRequest("Instance host is empty".to_string()));
        }

        Ok(())
    }
}

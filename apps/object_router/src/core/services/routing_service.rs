use std::{sync::Arc, time::Duration};

use app_core::UseCaseValidatable;
use bytes::Bytes;

use crate::core::{
    domain::models::{
        AppError,
        usecases::{GetObjectUseCaseInput, PutObjectUseCaseInput},
    },
    usecases::{GetObjectUseCase, PutObjectUseCase},
};

/// Entry point for object requests: every call resolves its owner on the ring
/// at call time.
pub struct RoutingService {
    get_object_use_case: Arc<GetObjectUseCase>,
    put_object_use_case: Arc<PutObjectUseCase>,
}

impl RoutingService {
    pub fn new(
        get_object_use_case: Arc<GetObjectUseCase>,
        put_object_use_case: Arc<PutObjectUseCase>,
    ) -> Self {
        Self {
            get_object_use_case,
            put_object_use_case,
        }
    }

    pub async fn get_object(&self, id: &str, timeout: Duration) -> Result<Bytes, AppError> {
        let output = self
            .get_object_use_case
            .validate_and_execute(GetObjectUseCaseInput {
                id: id.to_string(),
                timeout,
            })
            .await?;

        Ok(output.body)
    }

    pub async fn put_object(
        &self,
        id: &str,
        body: Bytes,
        timeout: Duration,
    ) -> Result<Arc<str>, AppError> {
        let output = self
            .put_object_use_case
            .validate_and_execute(PutObjectUseCaseInput {
                id: id.to_string(),
                body,
                timeout,
            })
            .await?;

        Ok(output.node_id)
    }
}

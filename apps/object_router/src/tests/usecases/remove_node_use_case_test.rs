#[cfg(test)]
mod tests {
    use app_core::{UseCase, UseCaseValidatable};
    use std::sync::Arc;

    use crate::core::domain::models::{AppError, StopPolicy, usecases::RemoveNodeUseCaseInput};
    use crate::core::usecases::RemoveNodeUseCase;
    use crate::tests::test_mocks::MockNodeProvider;

    #[tokio::test]
    async fn validate_fails_when_node_id_is_empty() {
        let uc = RemoveNodeUseCase::new(Arc::new(MockNodeProvider::new()));

        let input = RemoveNodeUseCaseInput {
            node_id: "".into(),
            policy: StopPolicy::Remove,
        };

        match uc.validate(&input).await.unwrap_err() {
            AppError::BadRequest(msg) => assert_eq!(msg, "Node id is empty"),
            other => panic!("Expected BadRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn remove_policy_deletes_node() {
        let provider = Arc::new(MockNodeProvider::new());
        let uc = RemoveNodeUseCase::new(provider.clone());

        let out = uc
            .execute(RemoveNodeUseCaseInput {
                node_id: "10.0.0.2:9000".into(),
                policy: StopPolicy::Remove,
            })
            .await
            .unwrap();

        assert!(out.success);
        assert_eq!(
            provider.last_remove_node.lock().as_deref(),
            Some("10.0.0.2:9000")
        );
        assert!(provider.last_stop_node.lock().is_none());
    }

    #[tokio::test]
    async fn stop_policy_only_marks_node() {
        let provider = Arc::new(MockNodeProvider::new());
        let uc = RemoveNodeUseCase::new(provider.clone());

        uc.execute(RemoveNodeUseCaseInput {
            node_id: "10.0.0.2:9000".into(),
            policy: StopPolicy::Stop,
        })
        .await
        .unwrap();

        assert_eq!(
            provider.last_stop_node.lock().as_deref(),
            Some("10.0.0.2:9000")
        );
        assert!(provider.last_remove_node.lock().is_none());
    }

    #[tokio::test]
    async fn unknown_node_is_not_an_error() {
        let provider = Arc::new(MockNodeProvider::new());
        *provider.membership_result.lock() = false;
        let uc = RemoveNodeUseCase::new(provider);

        let out = uc
            .validate_and_execute(RemoveNodeUseCaseInput {
                node_id: "10.0.0.99:9000".into(),
                policy: StopPolicy::Remove,
            })
            .await
            .unwrap();

        assert!(!out.success);
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use std::sync::Arc;

    use crate::core::domain::models::BlobStoreError;
    use crate::core::domain::services::{BlobStore, BlobStoreFactory};
    use crate::infrastructure::adapters::services::{InMemoryBlobStore, InMemoryBlobStoreFactory};
    use crate::tests::test_mocks::instance_info;

    #[tokio::test]
    async fn second_bucket_creation_reports_existing() {
        let store = InMemoryBlobStore::new();

        store.ensure_bucket("amazin").await.unwrap();
        let err = store.ensure_bucket("amazin").await.unwrap_err();

        assert_eq!(err, BlobStoreError::BucketAlreadyExists("amazin".into()));
    }

    #[tokio::test]
    async fn objects_round_trip_within_bucket() {
        let store = InMemoryBlobStore::new();
        store.ensure_bucket("amazin").await.unwrap();

        store
            .put("amazin", "a", Bytes::from_static(b"one"))
            .await
            .unwrap();

        assert_eq!(
            store.get("amazin", "a").await.unwrap(),
            Bytes::from_static(b"one")
        );
        assert_eq!(
            store.get("amazin", "b").await.unwrap_err(),
            BlobStoreError::NotFound("b".into())
        );
        assert_eq!(store.object_count("amazin"), 1);
    }

    #[tokio::test]
    async fn missing_bucket_is_a_backend_error() {
        let store = InMemoryBlobStore::new();

        let err = store
            .put("nope", "a", Bytes::from_static(b"x"))
            .await
            .unwrap_err();
        assert!(matches!(err, BlobStoreError::Backend(_)));
    }

    #[tokio::test]
    async fn factory_reuses_store_per_host() {
        let factory = InMemoryBlobStoreFactory::new();

        let first = factory.connect(&instance_info("10.0.0.2:9000")).unwrap();
        first.ensure_bucket("amazin").await.unwrap();
        first
            .put("amazin", "k", Bytes::from_static(b"v"))
            .await
            .unwrap();

        let again = factory.connect(&instance_info("10.0.0.2:9000")).unwrap();
        assert_eq!(
            again.get("amazin", "k").await.unwrap(),
            Bytes::from_static(b"v")
        );

        let other = factory.connect(&instance_info("10.0.0.3:9000")).unwrap();
        assert!(other.get("amazin", "k").await.is_err());
        assert!(!Arc::ptr_eq(
            &factory.store("10.0.0.2:9000").unwrap(),
            &factory.store("10.0.0.3:9000").unwrap()
        ));
    }
}

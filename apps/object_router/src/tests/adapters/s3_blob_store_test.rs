#[cfg(test)]
mod tests {
    use std::{collections::HashMap, collections::HashSet, net::SocketAddr, sync::Arc, time::Duration};

    use axum::{
        Router,
        extract::State,
        http::{HeaderMap, Method, StatusCode, Uri},
    };
    use bytes::Bytes;
    use chrono::NaiveDateTime;
    use parking_lot::Mutex;
    use tokio::net::TcpListener;

    use crate::core::domain::models::{BlobStoreError, InstanceInfo};
    use crate::core::domain::services::{BlobStore, BlobStoreFactory};
    use crate::infrastructure::adapters::services::{
        S3BlobStoreFactory,
        sigv4::{SigV4Signer, payload_hash},
    };

    const USER: &str = "admin";
    const PASSWORD: &str = "secret";
    const REGION: &str = "us-east-1";

    /// Path-style S3 endpoint that rejects anything not signed with `USER`/`PASSWORD`.
    #[derive(Default)]
    struct FakeS3 {
        buckets: Mutex<HashSet<String>>,
        objects: Mutex<HashMap<String, Bytes>>,
    }

    fn header(headers: &HeaderMap, name: &str) -> String {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    fn signature_matches(method: &Method, uri: &Uri, headers: &HeaderMap, body: &Bytes) -> bool {
        let date = header(headers, "x-amz-date");
        let Ok(at) = NaiveDateTime::parse_from_str(&date, "%Y%m%dT%H%M%SZ") else {
            return false;
        };

        let content_sha256 = header(headers, "x-amz-content-sha256");
        if content_sha256 != payload_hash(body) {
            return false;
        }

        let host = header(headers, "host");
        let expected = SigV4Signer::new(USER, PASSWORD, REGION).authorization(
            method.as_str(),
            uri.path(),
            &[
                ("host", host.as_str()),
                ("x-amz-content-sha256", content_sha256.as_str()),
                ("x-amz-date", date.as_str()),
            ],
            &content_sha256,
            &at.and_utc(),
        );

        expected.is_ok_and(|expected| expected == header(headers, "authorization"))
    }

    async fn handle(
        State(s3): State<Arc<FakeS3>>,
        method: Method,
        uri: Uri,
        headers: HeaderMap,
        body: Bytes,
    ) -> (StatusCode, Bytes) {
        if !signature_matches(&method, &uri, &headers, &body) {
            return (StatusCode::FORBIDDEN, Bytes::new());
        }

        let path = uri.path().trim_start_matches('/').to_string();
        let (bucket, key) = match path.split_once('/') {
            Some((bucket, key)) => (bucket.to_string(), Some(key)),
            None => (path.clone(), None),
        };

        match (method, key) {
            (Method::PUT, None) => {
                if s3.buckets.lock().insert(bucket) {
                    (StatusCode::OK, Bytes::new())
                } else {
                    (StatusCode::CONFLICT, Bytes::new())
                }
            }
            (Method::PUT, Some(_)) if s3.buckets.lock().contains(&bucket) => {
                s3.objects.lock().insert(path, body);
                (StatusCode::OK, Bytes::new())
            }
            (Method::GET, Some(_)) => match s3.objects.lock().get(&path) {
                Some(object) => (StatusCode::OK, object.clone()),
                None => (StatusCode::NOT_FOUND, Bytes::new()),
            },
            _ => (StatusCode::NOT_FOUND, Bytes::new()),
        }
    }

    async fn spawn_fake_s3() -> SocketAddr {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new()
            .fallback(handle)
            .with_state(Arc::new(FakeS3::default()));
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        addr
    }

    fn connect(host: String, password: &str) -> Arc<dyn BlobStore> {
        let factory = S3BlobStoreFactory::new(Duration::from_secs(2), REGION).unwrap();
        factory
            .connect(&InstanceInfo {
                host,
                user: USER.to_string(),
                password: password.to_string(),
            })
            .unwrap()
    }

    #[tokio::test]
    async fn signed_requests_are_accepted() {
        let addr = spawn_fake_s3().await;
        let store = connect(addr.to_string(), PASSWORD);

        store.ensure_bucket("amazin").await.unwrap();
        assert_eq!(
            store.ensure_bucket("amazin").await.unwrap_err(),
            BlobStoreError::BucketAlreadyExists("amazin".into())
        );

        store
            .put("amazin", "a b/c", Bytes::from_static(b"payload"))
            .await
            .unwrap();
        store.put("amazin", "empty", Bytes::new()).await.unwrap();

        assert_eq!(
            store.get("amazin", "a b/c").await.unwrap(),
            Bytes::from_static(b"payload")
        );
        assert_eq!(store.get("amazin", "empty").await.unwrap(), Bytes::new());
        assert_eq!(
            store.get("amazin", "missing").await.unwrap_err(),
            BlobStoreError::NotFound("missing".into())
        );
    }

    #[tokio::test]
    async fn wrong_credentials_are_rejected() {
        let addr = spawn_fake_s3().await;
        let store = connect(addr.to_string(), "not-the-secret");

        match store.ensure_bucket("amazin").await.unwrap_err() {
            BlobStoreError::Backend(msg) => assert!(msg.contains("403")),
            other => panic!("Expected Backend, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_instance_is_unavailable() {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let store = connect(addr.to_string(), PASSWORD);

        assert!(matches!(
            store.get("amazin", "a").await.unwrap_err(),
            BlobStoreError::Unavailable(_)
        ));
    }
}

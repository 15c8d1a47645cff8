use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use reqwest::{
    Client, Method, Response, StatusCode, Url,
    header::{AUTHORIZATION, HOST},
};
use tracing::trace;

use crate::{
    core::domain::{
        models::{BlobStoreError, InstanceInfo},
        services::{BlobStore, BlobStoreFactory},
    },
    infrastructure::adapters::services::sigv4::{SigV4Signer, amz_date, payload_hash, uri_encode},
};

/// S3-compatible instance addressed path-style: buckets at `/{bucket}`,
/// objects at `/{bucket}/{id}`, every request SigV4-signed with the
/// instance's root credentials.
pub struct S3BlobStore {
    client: Client,
    host: String,
    signer: SigV4Signer,
}

impl S3BlobStore {
    pub fn new(client: Client, instance: &InstanceInfo, region: &str) -> Result<Self, BlobStoreError> {
        Url::parse(&format!("http://{}/", instance.host))
            .map_err(|e| BlobStoreError::Backend(format!("invalid host {}: {e}", instance.host)))?;

        Ok(Self {
            client,
            host: instance.host.clone(),
            signer: SigV4Signer::new(&instance.user, &instance.password, region),
        })
    }

    fn path(segments: &[&str]) -> String {
        segments
            .iter()
            .map(|segment| format!("/{}", uri_encode(segment)))
            .collect()
    }

    async fn send(
        &self,
        method: Method,
        segments: &[&str],
        body: Bytes,
    ) -> Result<Response, BlobStoreError> {
        let path = Self::path(segments);
        let url = Url::parse(&format!("http://{}{path}", self.host))
            .map_err(|e| BlobStoreError::Backend(e.to_string()))?;

        let now = Utc::now();
        let date = amz_date(&now);
        let content_sha256 = payload_hash(&body);
        let authorization = self.signer.authorization(
            method.as_str(),
            &path,
            &[
                ("host", self.host.as_str()),
                ("x-amz-content-sha256", content_sha256.as_str()),
                ("x-amz-date", date.as_str()),
            ],
            &content_sha256,
            &now,
        )?;

        trace!(%method, %url, "S3 request");

        let mut request = self
            .client
            .request(method.clone(), url)
            .header(HOST, self.host.as_str())
            .header("x-amz-content-sha256", content_sha256)
            .header("x-amz-date", date)
            .header(AUTHORIZATION, authorization);

        if method == Method::PUT {
            request = request.body(body);
        }

        request.send().await.map_err(transport_error)
    }
}

fn transport_error(err: reqwest::Error) -> BlobStoreError {
    if err.is_connect() || err.is_timeout() {
        BlobStoreError::Unavailable(err.to_string())
    } else {
        BlobStoreError::Backend(err.to_string())
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn get(&self, bucket: &str, id: &str) -> Result<Bytes, BlobStoreError> {
        let response = self.send(Method::GET, &[bucket, id], Bytes::new()).await?;

        match response.status() {
            status if status.is_success() => response.bytes().await.map_err(transport_error),
            StatusCode::NOT_FOUND => Err(BlobStoreError::NotFound(id.to_string())),
            status => Err(BlobStoreError::Backend(format!("GET {id} failed: {status}"))),
        }
    }

    async fn put(&self, bucket: &str, id: &str, body: Bytes) -> Result<(), BlobStoreError> {
        let response = self.send(Method::PUT, &[bucket, id], body).await?;

        if !response.status().is_success() {
            return Err(BlobStoreError::Backend(format!(
                "PUT {id} failed: {}",
                response.status()
            )));
        }

        Ok(())
    }

    async fn ensure_bucket(&self, bucket: &str) -> Result<(), BlobStoreError> {
        let response = self.send(Method::PUT, &[bucket], Bytes::new()).await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::CONFLICT => Err(BlobStoreError::BucketAlreadyExists(bucket.to_string())),
            status => Err(BlobStoreError::Backend(format!(
                "creating bucket {bucket} failed: {status}"
            ))),
        }
    }
}

/// Shares one connection pool across every instance it connects to.
pub struct S3BlobStoreFactory {
    client: Client,
    region: String,
}

impl S3BlobStoreFactory {
    pub fn new(request_timeout: Duration, region: impl Into<String>) -> Result<Self, BlobStoreError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| BlobStoreError::Backend(e.to_string()))?;

        Ok(Self {
            client,
            region: region.into(),
        })
    }
}

impl BlobStoreFactory for S3BlobStoreFactory {
    fn connect(&self, instance: &InstanceInfo) -> Result<Arc<dyn BlobStore>, BlobStoreError> {
        Ok(Arc::new(S3BlobStore::new(
            self.client.clone(),
            instance,
            &self.region,
        )?))
    }
}

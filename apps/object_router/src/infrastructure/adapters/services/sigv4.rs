//! AWS Signature Version 4 for S3-compatible object stores.
//!
//! Only what path-style object calls need: no query string, every header
//! passed in is signed.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::core::domain::models::BlobStoreError;

type HmacSha256 = Hmac<Sha256>;

pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";
pub const DEFAULT_REGION: &str = "us-east-1";
const SERVICE: &str = "s3";

#[derive(Clone)]
pub struct SigV4Signer {
    access_key: String,
    secret_key: String,
    region: String,
}

impl SigV4Signer {
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            region: region.into(),
        }
    }

    /// Value of the `Authorization` header. `headers` must contain `host`,
    /// `x-amz-date` and `x-amz-content-sha256` with the values actually sent.
    pub fn authorization(
        &self,
        method: &str,
        canonical_uri: &str,
        headers: &[(&str, &str)],
        payload_hash: &str,
        at: &DateTime<Utc>,
    ) -> Result<String, BlobStoreError> {
        let date = at.format("%Y%m%d").to_string();

        let mut headers: Vec<(String, &str)> = headers
            .iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value.trim()))
            .collect();
        headers.sort_by(|a, b| a.0.cmp(&b.0));

        let signed_headers = headers
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(";");
        let canonical_headers: String = headers
            .iter()
            .map(|(name, value)| format!("{name}:{value}\n"))
            .collect();

        let canonical_request = format!(
            "{method}\n{canonical_uri}\n\n{canonical_headers}\n{signed_headers}\n{payload_hash}"
        );

        let scope = format!("{date}/{}/{SERVICE}/aws4_request", self.region);
        let string_to_sign = format!(
            "{ALGORITHM}\n{}\n{scope}\n{}",
            amz_date(at),
            hex::encode(Sha256::digest(canonical_request.as_bytes()))
        );

        let signing_key = self.signing_key(&date)?;
        let signature = hex::encode(hmac_sha256(&signing_key, string_to_sign.as_bytes())?);

        Ok(format!(
            "{ALGORITHM} Credential={}/{scope}, SignedHeaders={signed_headers}, Signature={signature}",
            self.access_key
        ))
    }

    fn signing_key(&self, date: &str) -> Result<Vec<u8>, BlobStoreError> {
        let secret = format!("AWS4{}", self.secret_key);

        let date_key = hmac_sha256(secret.as_bytes(), date.as_bytes())?;
        let region_key = hmac_sha256(&date_key, self.region.as_bytes())?;
        let service_key = hmac_sha256(&region_key, SERVICE.as_bytes())?;
        hmac_sha256(&service_key, b"aws4_request")
    }
}

/// `YYYYMMDDTHHMMSSZ`, the `x-amz-date` format.
pub fn amz_date(at: &DateTime<Utc>) -> String {
    at.format("%Y%m%dT%H%M%SZ").to_string()
}

pub fn payload_hash(body: &[u8]) -> String {
    hex::encode(Sha256::digest(body))
}

/// Percent-encodes everything but RFC 3986 unreserved characters.
pub fn uri_encode(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());

    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            other => encoded.push_str(&format!("%{other:02X}")),
        }
    }

    encoded
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, BlobStoreError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| BlobStoreError::Backend(format!("invalid signing key: {e}")))?;
    mac.update(data);

    Ok(mac.finalize().into_bytes().to_vec())
}

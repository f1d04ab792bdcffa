//! Object storage for player photos, backed by Cloudflare R2 through the
//! S3 API.

use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::primitives::ByteStream;

use pavilion_types::StorageError;

use crate::config::Config;

pub const R2_STORAGE_DOMAIN: &str = "r2.cloudflarestorage.com";

/// Where uploaded player photos end up. Blobs are write-once: a `put` on an
/// occupied key fails with [`StorageError::AlreadyExists`].
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Probes the store for `key`. A not-found response maps to `false`.
    async fn exists(&self, key: &str) -> Result<bool, StorageError>;

    /// Writes a blob and returns its public URL.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;
}

/// Public URL of an object, derived deterministically from bucket, account
/// and key.
pub fn public_object_url(bucket: &str, account_id: &str, key: &str) -> String {
    format!("https://{bucket}.{account_id}.{R2_STORAGE_DOMAIN}/{key}")
}

pub struct R2Store {
    client: S3Client,
    bucket: String,
    account_id: String,
}

impl R2Store {
    pub fn new(config: &Config) -> Self {
        let credentials = Credentials::new(
            config.r2_access_key.clone(),
            config.r2_secret_key.clone(),
            None,
            None,
            "pavilion-r2",
        );

        let s3_config = aws_sdk_s3::config::Builder::new()
            .region(Region::new("auto"))
            .endpoint_url(format!(
                "https://{}.{R2_STORAGE_DOMAIN}",
                config.r2_account_id
            ))
            .credentials_provider(credentials)
            .build();

        Self {
            client: S3Client::from_conf(s3_config),
            bucket: config.r2_bucket.clone(),
            account_id: config.r2_account_id.clone(),
        }
    }
}

#[async_trait]
impl BlobStore for R2Store {
    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(SdkError::ServiceError(err)) if err.err().is_not_found() => Ok(false),
            Err(err) => Err(StorageError::Unavailable(err.to_string())),
        }
    }

    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        // Probe first for a clean conflict message; the conditional write
        // below remains the authoritative guard against a concurrent upload
        // that passed the same probe.
        if self.exists(key).await? {
            return Err(StorageError::AlreadyExists {
                key: key.to_string(),
            });
        }

        tracing::debug!(bucket = %self.bucket, key, "writing object");

        let result = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .if_none_match("*")
            .send()
            .await;

        match result {
            Ok(_) => Ok(public_object_url(&self.bucket, &self.account_id, key)),
            Err(SdkError::ServiceError(err)) if err.raw().status().as_u16() == 412 => {
                Err(StorageError::AlreadyExists {
                    key: key.to_string(),
                })
            }
            Err(err) => Err(StorageError::Unavailable(err.to_string())),
        }
    }
}

use async_trait::async_trait;
use ::s3::creds::Credentials;
use ::s3::{Bucket, Region};
use tracing::debug;

use super::error::StorageError;
use super::traits::ObjectStore;
use crate::config::StorageConfig;

/// S3-compatible object store (AWS S3, Cloudflare R2, MinIO).
pub struct S3ObjectStore {
    bucket: Box<Bucket>,
}

impl S3ObjectStore {
    /// Build a bucket handle from configuration. No network traffic happens here.
    ///
    /// Credentials come from `access_key`/`secret_key` when both are set and
    /// from `AWS_ACCESS_KEY_ID`/`AWS_SECRET_ACCESS_KEY` otherwise.
    pub fn new(config: &StorageConfig) -> Result<Self, StorageError> {
        if config.bucket.trim().is_empty() {
            return Err(StorageError::Backend("bucket name is not configured".into()));
        }

        let endpoint = config
            .endpoint
            .clone()
            .unwrap_or_else(|| format!("https://s3.{}.amazonaws.com", config.region));
        let region = Region::Custom {
            region: config.region.clone(),
            endpoint,
        };

        let credentials = match (&config.access_key, &config.secret_key) {
            (Some(access), Some(secret)) => {
                Credentials::new(Some(access.as_str()), Some(secret.as_str()), None, None, None)
            }
            _ => Credentials::from_env(),
        }
        .map_err(|e| StorageError::Backend(format!("invalid credentials: {e}")))?;

        let mut bucket = Bucket::new(&config.bucket, region, credentials)
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        if config.path_style {
            bucket = bucket.with_path_style();
        }

        Ok(Self { bucket })
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StorageError> {
        let response = self
            .bucket
            .put_object_with_content_type(key, data, content_type)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        let status = response.status_code();
        if !(200..300).contains(&status) {
            return Err(StorageError::Rejected { status });
        }

        debug!(key, bytes = data.len(), status, "Object stored");
        Ok(())
    }
}

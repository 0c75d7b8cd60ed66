mod error;
mod traits;

pub mod filesystem;
#[cfg(feature = "s3")]
pub mod s3;

use std::sync::Arc;

use tracing::info;

pub use error::StorageError;
pub use traits::ObjectStore;

use crate::config::{StorageBackend, StorageConfig};

/// Build the configured object store. Called once at process start.
pub async fn connect(config: &StorageConfig) -> Result<Arc<dyn ObjectStore>, StorageError> {
    match config.backend {
        #[cfg(feature = "s3")]
        StorageBackend::S3 => {
            info!(bucket = %config.bucket, region = %config.region, "Using S3 object store");
            Ok(Arc::new(s3::S3ObjectStore::new(config)?))
        }
        #[cfg(not(feature = "s3"))]
        StorageBackend::S3 => Err(StorageError::Backend(
            "S3 support is not compiled in (enable the `s3` feature)".into(),
        )),
        StorageBackend::Filesystem => {
            info!(root = %config.root.display(), "Using filesystem object store");
            Ok(Arc::new(
                filesystem::FilesystemObjectStore::new(config.root.clone()).await?,
            ))
        }
    }
}

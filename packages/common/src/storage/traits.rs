use async_trait::async_trait;

use super::error::StorageError;

/// Key-addressed object storage.
///
/// Keys are `/`-separated logical paths (e.g. `videos/abc.mp4`). Writes are
/// acknowledged only once the backend has durably accepted the object.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `data` under `key`, tagged with `content_type`.
    ///
    /// An existing object under the same key is replaced.
    async fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StorageError>;
}

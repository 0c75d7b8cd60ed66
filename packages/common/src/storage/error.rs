use thiserror::Error;

/// Errors that can occur during object storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The object key is not acceptable for the backend.
    #[error("invalid object key: {0}")]
    InvalidKey(String),
    /// An I/O error occurred.
    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The remote store could not be reached or the request could not be built.
    #[error("object store backend error: {0}")]
    Backend(String),
    /// The remote store answered with a non-success status.
    #[error("object store rejected the request with status {status}")]
    Rejected { status: u16 },
}

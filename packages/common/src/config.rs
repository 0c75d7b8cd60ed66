use std::path::PathBuf;

use serde::Deserialize;

/// Which object store implementation to build at startup.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    S3,
    Filesystem,
}

/// App-level object storage configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Backend to use. Default: "s3".
    #[serde(default)]
    pub backend: StorageBackend,
    /// Bucket name. Required for the S3 backend.
    #[serde(default)]
    pub bucket: String,
    /// Region name. Default: "auto" (what R2 expects).
    #[serde(default = "default_region")]
    pub region: String,
    /// Custom S3 endpoint, e.g. an R2 account URL or a MinIO address.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub access_key: Option<String>,
    #[serde(default)]
    pub secret_key: Option<String>,
    /// Use path-style addressing (required by MinIO). Default: false.
    #[serde(default)]
    pub path_style: bool,
    /// Logical folder prepended to every generated object key. Default: "videos/".
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
    /// Root directory for the filesystem backend. Default: "./data/objects".
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

fn default_region() -> String {
    "auto".into()
}
fn default_key_prefix() -> String {
    "videos/".into()
}
fn default_root() -> PathBuf {
    PathBuf::from("./data/objects")
}

impl StorageConfig {
    /// Object key for a generated filename.
    pub fn object_key(&self, filename: &str) -> String {
        format!("{}{}", self.key_prefix, filename)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            bucket: String::new(),
            region: default_region(),
            endpoint: None,
            access_key: None,
            secret_key: None,
            path_style: false,
            key_prefix: default_key_prefix(),
            root: default_root(),
        }
    }
}

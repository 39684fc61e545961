//! Object storage staging (GCS + local filesystem)
//!
//! The final Parquet file is staged to the location the external warehouse
//! loader is configured to read. Local prefixes exist so tests can observe
//! the hand-off without cloud credentials.

use crate::error::{Error, Result};
use bytes::Bytes;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::local::LocalFileSystem;
use object_store::path::Path as ObjectPath;
use object_store::ObjectStore;
use std::sync::Arc;

/// Staging destination parsed from a URL
#[derive(Debug, Clone)]
pub struct CloudDestination {
    store: Arc<dyn ObjectStore>,
    prefix: String,
    scheme: String,
}

impl CloudDestination {
    /// Parse a destination URL and create the matching object store
    ///
    /// Supported formats:
    /// - `gs://bucket/path/` - Google Cloud Storage
    /// - `/local/path/` or `file:///local/path/` - Local filesystem
    pub fn parse(url: &str) -> Result<Self> {
        if url.starts_with("gs://") {
            Self::parse_gcs(url)
        } else {
            Self::parse_local(url)
        }
    }

    fn parse_gcs(url: &str) -> Result<Self> {
        let without_scheme = url
            .strip_prefix("gs://")
            .ok_or_else(|| Error::config(format!("Invalid GCS URL: {url}")))?;

        let (bucket, prefix) = match without_scheme.find('/') {
            Some(idx) => (
                &without_scheme[..idx],
                without_scheme[idx + 1..].to_string(),
            ),
            None => (without_scheme, String::new()),
        };

        let store = GoogleCloudStorageBuilder::from_env()
            .with_bucket_name(bucket)
            .build()
            .map_err(|e| Error::config(format!("Failed to create GCS client: {e}")))?;

        Ok(Self {
            store: Arc::new(store),
            prefix,
            scheme: "gs".to_string(),
        })
    }

    fn parse_local(path: &str) -> Result<Self> {
        let path = path.strip_prefix("file://").unwrap_or(path);

        std::fs::create_dir_all(path)
            .map_err(|e| Error::config(format!("Failed to create directory {path}: {e}")))?;

        let store = LocalFileSystem::new_with_prefix(path)
            .map_err(|e| Error::config(format!("Failed to create local store: {e}")))?;

        Ok(Self {
            store: Arc::new(store),
            prefix: String::new(),
            scheme: "file".to_string(),
        })
    }

    /// Check if this is a cloud destination (not local)
    pub fn is_cloud(&self) -> bool {
        self.scheme != "file"
    }

    /// Get the scheme (gs, file)
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Write bytes to an object in the destination, returning the full URL
    pub async fn put(&self, object: &str, data: Bytes) -> Result<String> {
        let path = if self.prefix.is_empty() {
            ObjectPath::from(object)
        } else {
            ObjectPath::from(format!("{}/{object}", self.prefix.trim_end_matches('/')))
        };

        self.store.put(&path, data.into()).await?;

        Ok(format!("{}://{path}", self.scheme))
    }
}

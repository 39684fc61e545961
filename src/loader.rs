//! Warehouse loader interface
//!
//! The warehouse load is performed by an external operator that reads the
//! final Parquet file from object storage and rewrites the destination
//! table. This crate only describes that hand-off and stages the file where
//! the operator expects it.

use crate::config::LoaderConfig;
use crate::error::Result;
use crate::output::CloudDestination;
use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File format of the staged source object
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    /// Columnar Parquet, schema inferred by the loader
    #[default]
    Parquet,
}

/// Destination table write mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteDisposition {
    /// Truncate the destination table and rewrite it wholesale
    #[default]
    Truncate,
    /// Append to the destination table
    Append,
}

/// Everything the external load operator needs to perform the load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseLoadSpec {
    /// Object storage bucket
    pub bucket: String,
    /// Object path of the final file within the bucket
    pub source_object: String,
    /// Format of the staged file
    pub source_format: SourceFormat,
    /// Fully-qualified destination warehouse table
    pub destination_table: String,
    /// Destination write mode
    pub write_disposition: WriteDisposition,
}

impl WarehouseLoadSpec {
    /// Build the load spec from the loader configuration
    pub fn from_config(config: &LoaderConfig) -> Self {
        Self {
            bucket: config.bucket.clone(),
            source_object: config.source_object.clone(),
            source_format: SourceFormat::Parquet,
            destination_table: config.destination_table.clone(),
            write_disposition: config.write_disposition,
        }
    }

    /// Full URI of the staged source object
    pub fn source_uri(&self) -> String {
        format!("gs://{}/{}", self.bucket, self.source_object)
    }
}

/// External warehouse load operator
///
/// Implementations live outside this crate (the orchestration layer wires
/// one in); the pipeline itself only stages the file and emits the spec.
#[async_trait]
pub trait WarehouseLoader {
    /// Load the staged object into the destination table
    async fn load(&self, spec: &WarehouseLoadSpec) -> Result<()>;
}

/// Stage the final Parquet file at the location the loader reads
///
/// Returns the URL of the staged object.
pub async fn stage_final_file(final_path: &Path, config: &LoaderConfig) -> Result<String> {
    let data = tokio::fs::read(final_path).await?;

    let destination = CloudDestination::parse(&config.staging_destination())?;
    let url = destination
        .put(&config.source_object, Bytes::from(data))
        .await?;

    tracing::info!(url = %url, table = %config.destination_table, "final file staged for warehouse load");
    Ok(url)
}

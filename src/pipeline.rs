//! Sequential pipeline orchestration
//!
//! Extract, transform, and the optional staging hand-off run in strict
//! sequence; each step starts only after the prior step has durably
//! persisted its output. No retries, locking, or timeouts at this layer;
//! run-level recovery belongs to the external orchestrator.

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::loader::{self, WarehouseLoadSpec};
use crate::stages;
use std::path::PathBuf;

/// Summary of a completed pipeline run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Rows in the intermediate dataset
    pub extracted_rows: usize,
    /// Rows in the final dataset
    pub final_rows: usize,
    /// Path of the intermediate file
    pub raw_path: PathBuf,
    /// Path of the final file
    pub final_path: PathBuf,
    /// URL of the staged object, when a loader hand-off is configured
    pub staged_object: Option<String>,
    /// Load spec handed to the external warehouse loader
    pub load_spec: Option<WarehouseLoadSpec>,
}

/// The orders ETL pipeline
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline over a validated configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Access the pipeline configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run all stages in sequence
    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!(
            workflow = %self.config.workflow.name,
            owner = %self.config.workflow.owner,
            "starting pipeline run"
        );

        let extract = stages::extract::run(&self.config)?;
        let transform = stages::transform::run(&self.config)?;

        let (staged_object, load_spec) = match &self.config.loader {
            Some(loader_config) => {
                let url = loader::stage_final_file(&transform.output_path, loader_config).await?;
                (Some(url), Some(WarehouseLoadSpec::from_config(loader_config)))
            }
            None => (None, None),
        };

        tracing::info!(
            workflow = %self.config.workflow.name,
            rows = transform.rows,
            "pipeline run complete"
        );

        Ok(RunSummary {
            extracted_rows: extract.rows,
            final_rows: transform.rows,
            raw_path: extract.output_path,
            final_path: transform.output_path,
            staged_object,
            load_spec,
        })
    }
}

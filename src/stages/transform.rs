//! Transformer stage
//!
//! Reads the intermediate Parquet file, renames columns to the canonical
//! warehouse schema by explicit name mapping, drops the helper month-label
//! column, derives `sales = amount * quantity`, and persists the final
//! Parquet file.

use crate::config::PipelineConfig;
use crate::dataset::FinalOrderRow;
use crate::error::Result;
use crate::output::{batch_to_raw_rows, final_rows_to_batch, read_parquet, write_batch_to_parquet};
use std::path::PathBuf;

/// Outcome of a completed transform stage
#[derive(Debug, Clone)]
pub struct TransformReport {
    /// Rows in the persisted final dataset
    pub rows: usize,
    /// Path of the final file
    pub output_path: PathBuf,
}

/// Run the transformer over the extractor's output
pub fn run(config: &PipelineConfig) -> Result<TransformReport> {
    let input_path = config.paths.raw_output();
    let batches = read_parquet(&input_path)?;

    tracing::debug!(path = %input_path.display(), batches = batches.len(), "intermediate dataset read");

    // column resolution is by name and fails fast on a missing or
    // mistyped column; the canonical rename happens on re-encode
    let mut final_rows = Vec::new();
    for batch in &batches {
        let raw_rows = batch_to_raw_rows(batch)?;
        final_rows.extend(raw_rows.into_iter().map(FinalOrderRow::from_raw));
    }

    let batch = final_rows_to_batch(&final_rows)?;
    let output_path = config.paths.final_output();
    let rows = write_batch_to_parquet(&output_path, &batch, None)?;

    tracing::info!(path = %output_path.display(), rows, "final orders dataset written");

    Ok(TransformReport { rows, output_path })
}

//! Extractor stage
//!
//! Reads the three source relations in full, inner-joins orders with
//! details, derives the month-label join key from the parsed order date,
//! outer-joins against sales targets, and persists the intermediate Parquet
//! file.

use crate::config::PipelineConfig;
use crate::dataset::{
    decode_rows, inner_join_on_order_id, outer_join_on_category_month, MergedOrder,
    OrderDetailRecord, OrderRecord, SalesTargetRecord,
};
use crate::error::Result;
use crate::output::{raw_rows_to_batch, write_batch_to_parquet};
use crate::source::SourceEngine;
use std::path::PathBuf;

/// Outcome of a completed extract stage
#[derive(Debug, Clone)]
pub struct ExtractReport {
    /// Rows in the persisted intermediate dataset
    pub rows: usize,
    /// Path of the intermediate file
    pub output_path: PathBuf,
}

/// Run the extractor against the configured source
pub fn run(config: &PipelineConfig) -> Result<ExtractReport> {
    let source = SourceEngine::connect(&config.source)?;
    tracing::info!(source = %source.connection_info(), "connected to source");

    let relations = &config.source.relations;
    let orders: Vec<OrderRecord> =
        decode_rows(&relations.orders, source.fetch_relation(&relations.orders)?)?;
    let details: Vec<OrderDetailRecord> = decode_rows(
        &relations.details,
        source.fetch_relation(&relations.details)?,
    )?;
    let targets: Vec<SalesTargetRecord> = decode_rows(
        &relations.targets,
        source.fetch_relation(&relations.targets)?,
    )?;

    tracing::debug!(
        orders = orders.len(),
        details = details.len(),
        targets = targets.len(),
        "relations fetched"
    );

    // inner join first; order dates are parsed only for surviving rows
    let merged = inner_join_on_order_id(orders, details)
        .into_iter()
        .map(|(order, detail)| MergedOrder::try_new(order, detail))
        .collect::<Result<Vec<_>>>()?;

    let raw_rows = outer_join_on_category_month(merged, targets);

    let batch = raw_rows_to_batch(&raw_rows)?;
    let output_path = config.paths.raw_output();
    let rows = write_batch_to_parquet(&output_path, &batch, None)?;

    tracing::info!(path = %output_path.display(), rows, "raw orders dataset written");

    Ok(ExtractReport { rows, output_path })
}

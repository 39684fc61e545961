//! # retail-etl
//!
//! Batch ETL for e-commerce orders: extracts order, order-detail, and
//! sales-target relations from a relational source, joins and reshapes them,
//! and writes warehouse-ready Parquet.
//!
//! ## Pipeline
//!
//! ```text
//! ┌───────────┐      ┌─────────────┐      ┌────────────────────┐
//! │ Extractor │ ───▶ │ Transformer │ ───▶ │ Warehouse loader   │
//! │ 3 reads,  │      │ rename/drop │      │ (external; reads   │
//! │ 2 joins   │      │ + sales col │      │  the staged file)  │
//! └───────────┘      └─────────────┘      └────────────────────┘
//!   raw_data_orders.parquet  orders_data.parquet
//! ```
//!
//! Stages run in strict sequence, each gated on the prior stage's durable
//! output. Failures propagate; run-level retry belongs to the external
//! orchestrator.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use retail_etl::{Pipeline, PipelineConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = PipelineConfig::from_yaml_file("pipeline.yaml")?;
//!     let summary = Pipeline::new(config).run().await?;
//!     println!("{} rows loaded-ready", summary.final_rows);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the pipeline
pub mod error;

/// Pipeline configuration
pub mod config;

/// Relational source access via DuckDB
pub mod source;

/// Typed tabular datasets and joins
pub mod dataset;

/// Arrow schemas, Parquet read/write, object-storage staging
pub mod output;

/// Extractor and transformer stages
pub mod stages;

/// Warehouse loader interface
pub mod loader;

/// Sequential pipeline orchestration
pub mod pipeline;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use pipeline::{Pipeline, RunSummary};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

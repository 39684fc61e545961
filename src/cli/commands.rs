//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Orders ETL pipeline CLI
#[derive(Parser, Debug)]
#[command(name = "retail-etl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pipeline configuration file (YAML)
    #[arg(short, long, global = true, default_value = "pipeline.yaml")]
    pub config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline: extract, transform, stage for load
    Run {
        /// Skip the object-storage hand-off even when a loader is configured
        #[arg(long)]
        no_handoff: bool,
    },

    /// Run the extractor stage only
    Extract,

    /// Run the transformer stage only (requires the extractor's output)
    Transform,

    /// Test the source database connection
    Check,

    /// Validate the configuration file
    Validate,
}

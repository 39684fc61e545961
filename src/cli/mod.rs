//! CLI module
//!
//! Command-line interface for running the pipeline.
//!
//! # Commands
//!
//! - `run` - Run the full pipeline
//! - `extract` - Extractor stage only
//! - `transform` - Transformer stage only
//! - `check` - Test the source connection
//! - `validate` - Validate the configuration file

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;

//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::source::SourceEngine;
use crate::stages;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Run { no_handoff } => self.run_pipeline(*no_handoff).await,
            Commands::Extract => self.extract(),
            Commands::Transform => self.transform(),
            Commands::Check => self.check(),
            Commands::Validate => self.validate(),
        }
    }

    fn load_config(&self) -> Result<PipelineConfig> {
        PipelineConfig::from_yaml_file(&self.cli.config)
    }

    async fn run_pipeline(&self, no_handoff: bool) -> Result<()> {
        let mut config = self.load_config()?;
        if no_handoff {
            config.loader = None;
        }

        let pipeline = Pipeline::new(config);
        let summary = pipeline.run().await?;

        println!("Output to {}", summary.raw_path.display());
        println!("Output to {}", summary.final_path.display());
        if let Some(url) = &summary.staged_object {
            println!("Staged to {url}");
        }
        if self.cli.verbose {
            println!(
                "{} rows extracted, {} rows written",
                summary.extracted_rows, summary.final_rows
            );
            if let Some(spec) = &summary.load_spec {
                println!(
                    "Loader reads {} into {} ({:?})",
                    spec.source_uri(),
                    spec.destination_table,
                    spec.write_disposition
                );
            }
        }
        Ok(())
    }

    fn extract(&self) -> Result<()> {
        let config = self.load_config()?;
        let report = stages::extract::run(&config)?;
        println!("Output to {}", report.output_path.display());
        if self.cli.verbose {
            println!("{} rows extracted", report.rows);
        }
        Ok(())
    }

    fn transform(&self) -> Result<()> {
        let config = self.load_config()?;
        let report = stages::transform::run(&config)?;
        println!("Output to {}", report.output_path.display());
        if self.cli.verbose {
            println!("{} rows written", report.rows);
        }
        Ok(())
    }

    fn check(&self) -> Result<()> {
        let config = self.load_config()?;
        let engine = SourceEngine::connect(&config.source)?;
        engine.check_connection()?;
        println!("Connection OK: {}", engine.connection_info());
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let config = self.load_config()?;
        println!(
            "Config OK: workflow '{}' (owner '{}')",
            config.workflow.name, config.workflow.owner
        );
        Ok(())
    }
}

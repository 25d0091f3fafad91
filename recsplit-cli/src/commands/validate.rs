//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use recsplit_core::RecursiveSplitter;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the splitter configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let checked = CliConfig::from_file(&self.config).and_then(|config| {
            let splitter = RecursiveSplitter::new(config.splitter.to_config()?)?;
            Ok((config, splitter))
        });

        match checked {
            Ok((config, splitter)) => {
                println!("✓ Configuration is valid!");
                println!("  Chunk size: {}", splitter.chunk_size());
                println!("  Overlap size: {}", splitter.overlap_size());
                println!("  Separators: {:?}", splitter.separators());
                println!("  Keep type: {}", splitter.keep_type());
                if let Some(template) = &config.splitter.id_template {
                    println!("  ID template: {template}");
                }
                println!("  Output format: {}", config.output.default_format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

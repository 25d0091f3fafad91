//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Target chunk size written into the template
    #[arg(long, value_name = "N", default_value_t = 1000)]
    pub chunk_size: usize,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating splitter configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to tune chunking");
        println!("2. Validate your configuration:");
        println!("   recsplit validate --config {}", self.output.display());
        println!("3. Use it for splitting:");
        println!(
            "   recsplit split -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let overlap = self.chunk_size / 5;
        format!(
            r#"# recsplit configuration

[splitter]
# Target maximum chunk size, in characters
chunk_size = {chunk_size}

# Characters shared between consecutive chunks (must be below chunk_size)
overlap_size = {overlap}

# Separators tried from coarsest to finest.
# "" splits into single characters; drop it to never cut inside a word.
separators = ["\n\n", "\n", " ", ""]

# Where a separator ends up: "none" drops it, "start" prefixes the next
# chunk, "end" suffixes the previous one
keep_type = "none"

# Optional chunk ID template; {{id}} is the source ID, {{index}} the chunk number
# id_template = "{{id}}_part{{index}}"

[output]
# text | json | markdown
default_format = "text"
pretty_json = true
"#,
            chunk_size = self.chunk_size,
            overlap = overlap,
        )
    }
}

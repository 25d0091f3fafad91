//! Split command implementation

use crate::config::{unescape_separator, CliConfig};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use recsplit_core::{KeepType, RecursiveSplitter, Transformer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Splitter configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = "RECSPLIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Target maximum chunk size in characters
    #[arg(long, value_name = "N")]
    pub chunk_size: Option<usize>,

    /// Overlap between consecutive chunks in characters
    #[arg(long, value_name = "N")]
    pub overlap: Option<usize>,

    /// Separator, coarsest first; repeat for more (accepts \n, \t, \r, \\)
    #[arg(short, long = "separator", value_name = "SEP")]
    pub separators: Vec<String>,

    /// Where separators are kept in the chunks
    #[arg(short, long, value_enum)]
    pub keep: Option<KeepArg>,

    /// Chunk ID template, e.g. "{id}_part{index}"
    #[arg(long, value_name = "TEMPLATE")]
    pub id_template: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, chunks one after another
    Text,
    /// JSON array of chunks with metadata
    Json,
    /// Markdown section per chunk
    Markdown,
}

/// Separator retention policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeepArg {
    /// Drop separators
    None,
    /// Keep separators at the start of the following chunk
    Start,
    /// Keep separators at the end of the preceding chunk
    End,
}

impl From<KeepArg> for KeepType {
    fn from(arg: KeepArg) -> Self {
        match arg {
            KeepArg::None => KeepType::None,
            KeepArg::Start => KeepType::Start,
            KeepArg::End => KeepType::End,
        }
    }
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting text splitting");
        log::debug!("Arguments: {:?}", self);

        let config = self.effective_config()?;
        let splitter = RecursiveSplitter::new(config.splitter.to_config()?)?;
        log::info!("Splitter: {:?}", splitter);

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.output.default_format, true)
                .map_err(|_| {
                    crate::CliError::ConfigError(format!(
                        "unknown output format '{}'",
                        config.output.default_format
                    ))
                })?,
        };

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to split", files.len());

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut total_chunks = 0;
        for path in &files {
            let document = FileReader::read_document(path)?;
            let chunks = splitter.transform(std::slice::from_ref(&document))?;

            for chunk in &chunks {
                formatter.format_chunk(chunk)?;
            }
            total_chunks += chunks.len();
            progress.file_completed(&path.display().to_string(), chunks.len());
        }

        formatter.finish()?;
        progress.finish();

        log::info!(
            "Split {} file(s) into {} chunk(s)",
            files.len(),
            total_chunks
        );
        Ok(())
    }

    /// Merge built-in defaults, the config file and command-line overrides
    pub fn effective_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => CliConfig::default(),
        };

        let settings = &mut config.splitter;
        if let Some(chunk_size) = self.chunk_size {
            settings.chunk_size = chunk_size;
        }
        if let Some(overlap) = self.overlap {
            settings.overlap_size = overlap;
        }
        if !self.separators.is_empty() {
            settings.separators = self
                .separators
                .iter()
                .map(|s| unescape_separator(s))
                .collect();
        }
        if let Some(keep) = self.keep {
            settings.keep_type = keep.into();
        }
        if let Some(template) = &self.id_template {
            settings.id_template = Some(template.clone());
        }

        Ok(config)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // try_init: a logger may already be installed (tests)
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: Vec<String>) -> SplitArgs {
        SplitArgs {
            input,
            output: None,
            format: None,
            config: None,
            chunk_size: None,
            overlap: None,
            separators: vec![],
            keep: None,
            id_template: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_effective_config_defaults() {
        let config = args(vec!["x".to_string()]).effective_config().unwrap();
        assert_eq!(config.splitter.chunk_size, 1000);
        assert_eq!(config.splitter.separators, ["\n\n", "\n", " ", ""]);
    }

    #[test]
    fn test_command_line_overrides_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("split.toml");
        fs::write(
            &config_path,
            "[splitter]\nchunk_size = 50\noverlap_size = 5\nkeep_type = \"start\"\n",
        )
        .unwrap();

        let mut split = args(vec!["x".to_string()]);
        split.config = Some(config_path);
        split.overlap = Some(0);
        split.separators = vec!["\\n".to_string(), "".to_string()];
        split.keep = Some(KeepArg::End);

        let config = split.effective_config().unwrap();
        assert_eq!(config.splitter.chunk_size, 50);
        assert_eq!(config.splitter.overlap_size, 0);
        assert_eq!(config.splitter.separators, ["\n", ""]);
        assert_eq!(config.splitter.keep_type, KeepType::End);
    }

    #[test]
    fn test_execute_writes_json_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("sample.txt");
        let output = temp_dir.path().join("out.json");
        fs::write(&input, "1a23a45a67890c1a234b5678a90").unwrap();

        let mut split = args(vec![input.display().to_string()]);
        split.output = Some(output.clone());
        split.format = Some(OutputFormat::Json);
        split.chunk_size = Some(5);
        split.overlap = Some(2);
        split.separators = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        split.keep = Some(KeepArg::Start);
        split.id_template = Some("part{index}".to_string());

        split.execute().unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let chunks: Vec<serde_json::Value> = serde_json::from_str(&written).unwrap();
        let contents: Vec<&str> = chunks
            .iter()
            .map(|c| c["content"].as_str().unwrap())
            .collect();
        assert_eq!(
            contents,
            ["1a23", "a45", "a67890", "c1", "a234", "b5678", "a90"]
        );
        assert_eq!(chunks[6]["id"], "part6");
    }

    #[test]
    fn test_execute_rejects_invalid_settings() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("sample.txt");
        fs::write(&input, "text").unwrap();

        let mut split = args(vec![input.display().to_string()]);
        split.chunk_size = Some(10);
        split.overlap = Some(10);

        let err = split.execute().unwrap_err();
        assert!(err.to_string().contains("overlap size must be less than chunk size"));
    }

    #[test]
    fn test_keep_arg_conversion() {
        assert_eq!(KeepType::from(KeepArg::None), KeepType::None);
        assert_eq!(KeepType::from(KeepArg::Start), KeepType::Start);
        assert_eq!(KeepType::from(KeepArg::End), KeepType::End);
    }
}

//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use recsplit_core::KeepType;

pub mod generate_config;
pub mod split;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into chunks
    Split(split::SplitArgs),

    /// Validate a splitter configuration file
    Validate(validate::ValidateArgs),

    /// Generate a splitter configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List separator keep types
    KeepTypes,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.entries() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed by the list command
    pub fn entries(&self) -> Vec<String> {
        match self {
            ListCommands::Formats => split::OutputFormat::value_variants()
                .iter()
                .filter_map(|format| format.to_possible_value())
                .map(|value| match value.get_help() {
                    Some(help) => format!("{:<10} {}", value.get_name(), help),
                    None => value.get_name().to_string(),
                })
                .collect(),
            ListCommands::KeepTypes => KeepType::ALL
                .iter()
                .map(|keep| {
                    let description = match keep {
                        KeepType::None => "drop separators",
                        KeepType::Start => "prefix the separator to the following chunk",
                        KeepType::End => "suffix the separator to the preceding chunk",
                    };
                    format!("{:<10} {}", keep.as_str(), description)
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_formats() {
        let entries = ListCommands::Formats.entries();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].starts_with("text"));
        assert!(entries[1].starts_with("json"));
        assert!(entries[2].starts_with("markdown"));
    }

    #[test]
    fn test_list_keep_types() {
        let entries = ListCommands::KeepTypes.entries();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].starts_with("none"));
        assert!(entries[1].starts_with("start"));
        assert!(entries[2].starts_with("end"));
    }

    #[test]
    fn test_list_command_executes() {
        let cmd = Commands::List {
            subcommand: ListCommands::KeepTypes,
        };
        assert!(cmd.execute().is_ok());
    }

    #[test]
    fn test_commands_debug_format() {
        let cmd = Commands::Validate(validate::ValidateArgs {
            config: "split.toml".into(),
        });
        let debug_str = format!("{:?}", cmd);
        assert!(debug_str.contains("Validate"));
        assert!(debug_str.contains("split.toml"));
    }
}

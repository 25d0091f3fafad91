//! recsplit command-line entry point

use clap::Parser;
use recsplit_cli::commands::Commands;
use recsplit_cli::CliResult;

/// Split documents into overlapping, size-bounded chunks
#[derive(Debug, Parser)]
#[command(name = "recsplit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

//! furiwake command-line entry point

use clap::Parser;
use furiwake_cli::commands::Commands;

/// Split Japanese dictionary entries into furigana segments
#[derive(Debug, Parser)]
#[command(name = "furiwake", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

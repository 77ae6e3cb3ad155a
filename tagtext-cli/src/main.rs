//! tagtext command-line entry point

use anyhow::Result;
use clap::Parser;
use tagtext_cli::commands::Commands;

/// Split text into styled, pressable segments
#[derive(Debug, Parser)]
#[command(name = "tagtext", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}

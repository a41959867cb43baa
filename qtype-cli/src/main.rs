//! qtype command-line entry point

use clap::Parser;
use qtype_cli::commands::Commands;

/// Classify the question types of text lines
#[derive(Debug, Parser)]
#[command(name = "qtype", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

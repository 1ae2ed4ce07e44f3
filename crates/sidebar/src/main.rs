//! Sidebar CLI - navigation tree tooling.
//!
//! Provides commands for:
//! - `check`: Validate sidebar references against the documentation source
//! - `toc`: Print the flattened table of contents
//! - `fmt`: Print sidebars in canonical form

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, FmtArgs, TocArgs};
use output::Output;

/// Sidebar - navigation tree tooling.
#[derive(Parser)]
#[command(name = "sidebar", version, about)]
struct Cli {
    /// Enable verbose output (show info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate document references in the sidebars.
    Check(CheckArgs),
    /// Print the table of contents.
    Toc(TocArgs),
    /// Print sidebars in canonical JSON form.
    Fmt(FmtArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Toc(args) => args.execute(),
        Commands::Fmt(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

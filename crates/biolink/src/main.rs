//! Biolink CLI - link-in-bio static page generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "biolink")]
#[command(about = "Generate link-in-bio pages from XML descriptors")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input directory containing page descriptors
    #[arg(value_name = "INPUT", default_value = ".")]
    input: PathBuf,

    /// Output directory for generated pages
    #[arg(value_name = "OUTPUT", default_value = "./build")]
    output: PathBuf,

    /// Escape interpolated text and deduplicate element ids
    #[arg(long)]
    strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a starter descriptor into a directory
    Init {
        /// Directory to place the starter descriptor in
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Some(Commands::Init { dir }) => commands::init::run(&dir)?,
        None => commands::build::run(cli.input, cli.output, cli.strict)?,
    }

    Ok(())
}

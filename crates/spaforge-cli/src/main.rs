//! spaforge CLI tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "spaforge")]
#[command(about = "Declarative AWS deployment for single page applications", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a deployment configuration
    Validate {
        /// Path to the configuration file
        #[arg(default_value = "spaforge.yml")]
        path: PathBuf,
    },
    /// Generate the resource template and build specification
    Synth {
        /// Path to the configuration file
        #[arg(default_value = "spaforge.yml")]
        path: PathBuf,
        /// Directory to write the generated documents into
        #[arg(long, env = "SPAFORGE_OUTPUT", default_value = "out")]
        output: PathBuf,
    },
    /// Print the generated build specification
    Buildspec {
        /// Path to the configuration file
        #[arg(default_value = "spaforge.yml")]
        path: PathBuf,
    },
    /// Write a starter configuration file
    Init {
        /// Path to write the configuration to
        #[arg(default_value = "spaforge.yml")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { path } => commands::validate(&path)?,
        Commands::Synth { path, output } => commands::synth(&path, &output)?,
        Commands::Buildspec { path } => commands::buildspec(&path)?,
        Commands::Init { path, force } => commands::init(&path, force)?,
    }

    Ok(())
}

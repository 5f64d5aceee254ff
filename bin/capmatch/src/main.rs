mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "capmatch")]
#[command(about = "W3C WebDriver capability negotiation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge option records into an alwaysMatch/firstMatch payload
    Merge {
        /// Record spec files, one JSON object per file, in preference order
        records: Vec<PathBuf>,
    },

    /// Translate a legacy capability map to its W3C form
    Normalize {
        /// JSON file holding one flat capability map
        legacy: PathBuf,
    },

    /// Build a complete new-session request body
    Session {
        /// Record spec files, one JSON object per file, in preference order
        records: Vec<PathBuf>,

        /// Legacy capability map, ranked after the record files
        #[arg(long)]
        legacy: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup tracing; stdout stays machine-readable, logs go to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Merge { records } => {
            commands::merge_cmd::run(records).await?;
        }
        Commands::Normalize { legacy } => {
            commands::normalize_cmd::run(&legacy).await?;
        }
        Commands::Session { records, legacy } => {
            commands::session::run(records, legacy).await?;
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                commands::config_cmd::show().await?;
            }
            ConfigCommands::Init { force } => {
                commands::config_cmd::init(force).await?;
            }
        },
    }

    Ok(())
}

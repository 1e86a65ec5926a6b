//! Lineage CLI - Command-line interface for Lineage
//!
//! Loads a ledger of assets and transfers, rebuilds the lineage forest and
//! prints the snapshot, per-address statistics or a hover tooltip.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "lineage")]
#[command(author = "Lineage Contributors")]
#[command(version)]
#[command(about = "Rebuild and inspect ownership hand-off lineages", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to .lineage/config.json in the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize Lineage in a directory with a config and sample ledger
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Build the lineage graph and print its layout
    Graph {
        /// Ledger JSON file
        #[arg(default_value = "ledger.json")]
        ledger: PathBuf,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show transfer statistics for an address
    Stats {
        /// Ledger JSON file
        #[arg(default_value = "ledger.json")]
        ledger: PathBuf,

        /// Subject address (falls back to the configured subject)
        #[arg(short, long)]
        subject: Option<String>,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show the tooltip for a pointer hovering an address
    Hover {
        /// Address under the pointer
        address: String,

        /// Ledger JSON file
        #[arg(short, long, default_value = "ledger.json")]
        ledger: PathBuf,

        /// Pointer x, relative to the container
        #[arg(short = 'x', long, allow_negative_numbers = true)]
        x: f64,

        /// Pointer y, relative to the container
        #[arg(short = 'y', long, allow_negative_numbers = true)]
        y: f64,

        /// Container width
        #[arg(long, default_value = "800")]
        width: f64,

        /// Container height
        #[arg(long, default_value = "500")]
        height: f64,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = commands::load_config(cli.config.as_deref()).and_then(|config| {
        match cli.command {
            Commands::Init { path } => commands::init(&path),
            Commands::Graph { ledger, json } => commands::graph(&ledger, &config, json),
            Commands::Stats {
                ledger,
                subject,
                json,
            } => commands::stats(&ledger, subject.as_deref(), &config, json),
            Commands::Hover {
                address,
                ledger,
                x,
                y,
                width,
                height,
                json,
            } => commands::hover(
                &ledger,
                &address,
                commands::HoverArgs {
                    x,
                    y,
                    width,
                    height,
                },
                &config,
                json,
            ),
        }
    });

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

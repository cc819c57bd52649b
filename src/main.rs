//! swarm-convert - inspect swarm control-plane dumps
//!
//! Converts decoded manager objects to the daemon's API JSON, for
//! debugging what a cluster actually returns.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use swarm_convert::inspect::{inspect_file, ObjectKind};
use swarm_convert::system;
use tracing_subscriber::EnvFilter;

/// Swarm control-plane conversion tool
#[derive(Parser)]
#[command(name = "swarm-convert")]
#[command(version)]
#[command(about = "Convert swarm control-plane objects to API JSON", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a JSON dump of wire objects
    Inspect {
        /// Object kind (network, service, node, task, secret, config)
        kind: ObjectKind,
        /// File holding one object or an array of objects
        file: PathBuf,
        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Check whether this platform supports cluster mode
    Platform,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the default level
    let default_level = if cli.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Inspect {
            kind,
            file,
            compact,
        } => {
            let converted = inspect_file(kind, &file)
                .with_context(|| format!("Failed to inspect {}", file.display()))?;

            let output = if compact {
                serde_json::to_string(&converted.items)?
            } else {
                serde_json::to_string_pretty(&converted.items)?
            };
            println!("{}", output);

            for failure in &converted.failures {
                eprintln!("{} {}: {}", kind, failure.id, failure.error);
            }
            if !converted.is_complete() {
                bail!(
                    "{} of {} objects failed to convert",
                    converted.failures.len(),
                    converted.failures.len() + converted.items.len()
                );
            }
        }

        Commands::Platform => {
            system::check_platform()?;
            println!(
                "{}/{} supports cluster mode",
                std::env::consts::OS,
                std::env::consts::ARCH
            );
        }
    }

    Ok(())
}

//! polydist CLI - Mahalanobis distance between polynomials
//!
//! This binary evaluates distance requests, aligns coefficient lists, and
//! runs a built-in worked example.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use polydist_cli::commands;

/// polydist - Compare polynomials under a Mahalanobis metric
#[derive(Parser)]
#[command(name = "polydist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the distance for a JSON request file
    Distance {
        /// Path to the request file (poly1, poly2, inv_cov)
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Zero-pad two coefficient lists to a common length
    Align {
        /// First coefficient list, comma-separated, lowest degree first
        #[arg(short, long, allow_hyphen_values = true)]
        a: String,

        /// Second coefficient list, comma-separated, lowest degree first
        #[arg(short, long, allow_hyphen_values = true)]
        b: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Evaluate the built-in worked example
    Demo {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Distance { input, json } => commands::distance::run(&input, json),
        Commands::Align { a, b, json } => commands::align::run(&a, &b, json),
        Commands::Demo { json } => commands::demo::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

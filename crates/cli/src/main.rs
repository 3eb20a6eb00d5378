// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

use cakechain_cli::commands::{inspect, root, verify};
use cakechain_cli::config::{OutputFormat, RunConfig};
use cakechain_cli::telemetry;

#[derive(Parser)]
#[command(name = "cakestate")]
#[command(about = "Compute Cakechain state canonical bytes and state root (SHA-256)", long_about = None)]
struct Cli {
    /// Debug logging on stderr (overridden by CAKESTATE_LOG / RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute canonical bytes and state root of a JSON state file.
    Root {
        /// Path to JSON describing state balances/nonces (`-` for stdin)
        json_path: PathBuf,

        /// Print a parsed-state summary before the hex lines
        #[arg(long)]
        pretty: bool,

        /// Print the full commitment as JSON
        #[arg(long, conflicts_with = "pretty")]
        json: bool,
    },
    /// Check that a JSON state file hashes to an expected state root.
    Verify {
        /// Path to JSON describing state balances/nonces (`-` for stdin)
        json_path: PathBuf,

        /// Expected state root, 64 hex chars (`0x` optional)
        #[arg(long, short)]
        expect: String,
    },
    /// Decode canonical bytes (hex) and list their entries.
    Inspect {
        canonical_hex: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = RunConfig::default().with_log_filter_from_env(cli.verbose);
    telemetry::init_tracing(&cfg.log_filter);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Root {
            json_path,
            pretty,
            json,
        } => {
            cfg.pretty = pretty;
            cfg.format = if json { OutputFormat::Json } else { OutputFormat::Text };
            root::run(&json_path, &cfg, &mut out)?;
        }
        Commands::Verify { json_path, expect } => verify::run(&json_path, &expect, &mut out)?,
        Commands::Inspect { canonical_hex } => {
            inspect::run(&canonical_hex, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

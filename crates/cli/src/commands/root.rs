// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use anyhow::Context;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::io::Write;
use std::path::Path;

use cakechain_state::{LedgerState, StateCommitment};

use crate::config::{OutputFormat, RunConfig};
use crate::input;

/// Loads a state document and computes its canonical bytes and root.
pub fn compute(path: &Path) -> anyhow::Result<(LedgerState, StateCommitment)> {
    let doc = input::read_document(path)?;
    let state = LedgerState::from_json(&doc)
        .with_context(|| format!("Rejected state in {}", path.display()))?;
    let commitment = state.commitment();
    tracing::info!(
        balances = commitment.balances_count,
        nonces = commitment.nonces_count,
        root = %commitment.state_root_hex,
        "state root computed"
    );
    Ok((state, commitment))
}

/// Nothing is written to `out` unless the whole computation succeeds.
pub fn run(path: &Path, cfg: &RunConfig, out: &mut impl Write) -> anyhow::Result<StateCommitment> {
    let (_, commitment) = compute(path)?;

    match cfg.format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&commitment)?)?;
        }
        OutputFormat::Text => {
            if cfg.pretty {
                writeln!(out, "{}\n", summary_table(&commitment))?;
            }
            writeln!(out, "canonical_bytes_hex: {}", commitment.canonical_bytes_hex)?;
            writeln!(out, "state_root_hex:      {}", commitment.state_root_hex)?;
        }
    }

    Ok(commitment)
}

fn summary_table(commitment: &StateCommitment) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Parsed State", "Value"]);

    table.add_row(vec!["Format", commitment.format_version.as_str()]);
    table.add_row(vec!["Balances", &format!("{} entries", commitment.balances_count)]);
    table.add_row(vec!["Nonces", &format!("{} entries", commitment.nonces_count)]);
    table.add_row(vec!["Canonical Bytes", &format!("{} bytes", commitment.canonical_len)]);
    table
}

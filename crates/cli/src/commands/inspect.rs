// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use anyhow::Context;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::io::Write;

use cakechain_state::snapshot::decode_state;
use cakechain_state::{LedgerState, SectionKind};

use crate::input;

/// Decodes canonical bytes given as hex and prints the entries they hold.
pub fn run(canonical_hex: &str, out: &mut impl Write) -> anyhow::Result<LedgerState> {
    let bytes = input::decode_hex(canonical_hex)?;
    let state = decode_state(&bytes).context("Not a canonical STATEv1 encoding")?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(vec!["Section", "#", "Address", "Value"]);

    for kind in SectionKind::ALL {
        for (index, (addr, value)) in state.section(kind).sorted_entries().into_iter().enumerate() {
            table.add_row(vec![
                kind.key().to_string(),
                index.to_string(),
                addr.to_prefixed_hex(),
                value.to_string(),
            ]);
        }
    }

    writeln!(out, "\nCanonical State ({} bytes)\n", bytes.len())?;
    writeln!(out, "{table}\n")?;
    writeln!(out, "Balances:       {}", state.balances.len())?;
    writeln!(out, "Nonces:         {}", state.nonces.len())?;
    writeln!(out, "state_root_hex: {}", state.state_root())?;

    Ok(state)
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use std::io::Write;
use std::path::Path;

use cakechain_state::StateRoot;

use crate::commands::root;

/// Recomputes the root of the state in `path` and compares it with `expected`.
pub fn run(path: &Path, expected: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let expected_root: StateRoot = expected
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("Expected root is not a 32-byte hex digest: {}", e))?;

    let (_, commitment) = root::compute(path)?;

    if commitment.root_matches(&expected_root.to_hex()) {
        writeln!(out, "\n✅ VERIFIED\n")?;
        writeln!(out, "State Root:    {}", commitment.state_root_hex)?;
        writeln!(out, "Canonical Len: {} bytes\n", commitment.canonical_len)?;
        Ok(())
    } else {
        tracing::warn!(
            expected = %expected_root,
            found = %commitment.state_root_hex,
            "state root mismatch"
        );
        anyhow::bail!(
            "State root mismatch: expected {}, found {}",
            expected_root,
            commitment.state_root_hex
        )
    }
}

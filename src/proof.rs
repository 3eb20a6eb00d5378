// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! State commitment output record.

use serde::{Deserialize, Serialize};

use crate::config::STATE_TAG;
use crate::types::StateRoot;

/// What one state computation publishes.
///
/// Two implementations agree on a state exactly when their
/// `canonical_bytes_hex` (and therefore `state_root_hex`) are equal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StateCommitment {
    /// Format tag as text, `STATEv1`.
    pub format_version: String,

    /// Lowercase hex of the canonical encoding.
    pub canonical_bytes_hex: String,

    /// Lowercase hex SHA-256 of the canonical encoding.
    pub state_root_hex: String,

    pub balances_count: usize,
    pub nonces_count: usize,

    /// Canonical encoding length in bytes.
    pub canonical_len: usize,
}

impl StateCommitment {
    pub fn new(canonical_bytes: &[u8], root: StateRoot, balances: usize, nonces: usize) -> Self {
        Self {
            format_version: String::from_utf8_lossy(STATE_TAG).into_owned(),
            canonical_bytes_hex: hex::encode(canonical_bytes),
            state_root_hex: root.to_hex(),
            balances_count: balances,
            nonces_count: nonces,
            canonical_len: canonical_bytes.len(),
        }
    }

    /// Case-insensitive comparison against an expected root, `0x` optional.
    pub fn root_matches(&self, expected: &str) -> bool {
        let expected = expected
            .strip_prefix("0x")
            .or_else(|| expected.strip_prefix("0X"))
            .unwrap_or(expected);
        self.state_root_hex.eq_ignore_ascii_case(expected)
    }
}

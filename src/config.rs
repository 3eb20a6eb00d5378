// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Protocol constants for the `STATEv1` canonical layout.

/// Format tag written at offset 0 of every canonical encoding. No length prefix.
pub const STATE_TAG: &[u8; 7] = b"STATEv1";

/// Raw address width in bytes.
pub const ADDRESS_LEN: usize = 32;

/// Hex characters in a textual address once the optional `0x` prefix is gone.
pub const ADDRESS_HEX_LEN: usize = ADDRESS_LEN * 2;

/// Width of every count and value field (u64 LE).
pub const U64_LEN: usize = 8;

/// One encoded entry: address || value.
pub const ENTRY_LEN: usize = ADDRESS_LEN + U64_LEN;

/// Canonical length of an empty state: tag + two zero counts.
pub const EMPTY_STATE_LEN: usize = STATE_TAG.len() + 2 * U64_LEN;

/// Record field carrying the address in list-form sections.
pub const ADDR_FIELD: &str = "addr";

/// Top-level key and record value field of the balances section.
pub const BALANCES_KEY: &str = "balances";
pub const AMOUNT_FIELD: &str = "amount";

/// Top-level key and record value field of the nonces section.
pub const NONCES_KEY: &str = "nonces";
pub const NONCE_FIELD: &str = "nonce";

/// Exact canonical length for the given section sizes.
pub const fn canonical_len(balances: usize, nonces: usize) -> usize {
    EMPTY_STATE_LEN + (balances + nonces) * ENTRY_LEN
}

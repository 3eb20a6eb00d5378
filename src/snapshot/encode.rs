// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Canonical state encoding.
//!
//! Layout (all integers u64 little-endian):
//! ```text
//! "STATEv1"                                  7 bytes, no length prefix
//! balances_count                             8 bytes
//!   [address(32) || amount(8)] * count       ascending by address
//! nonces_count                               8 bytes
//!   [address(32) || nonce(8)] * count        ascending by address
//! ```

use byteorder::{ByteOrder, LittleEndian};

use crate::config::{canonical_len, STATE_TAG, U64_LEN};
use crate::section::Section;

fn write_u64(buf: &mut [u8], offset: &mut usize, val: u64) {
    LittleEndian::write_u64(&mut buf[*offset..*offset + U64_LEN], val);
    *offset += U64_LEN;
}

fn write_raw(buf: &mut [u8], offset: &mut usize, bytes: &[u8]) {
    buf[*offset..*offset + bytes.len()].copy_from_slice(bytes);
    *offset += bytes.len();
}

fn write_section(buf: &mut [u8], offset: &mut usize, section: &Section) {
    write_u64(buf, offset, section.len() as u64);
    for (addr, value) in section.sorted_entries() {
        write_raw(buf, offset, addr.as_bytes());
        write_u64(buf, offset, value);
    }
}

/// Encodes two sections into their canonical byte sequence.
///
/// Depends only on section contents: entries are re-sorted here, so the
/// order they were loaded in never matters. Cannot fail.
pub fn encode_state(balances: &Section, nonces: &Section) -> Vec<u8> {
    let len = canonical_len(balances.len(), nonces.len());
    let mut buf = vec![0u8; len];
    let mut offset = 0;

    write_raw(&mut buf, &mut offset, STATE_TAG);
    write_section(&mut buf, &mut offset, balances);
    write_section(&mut buf, &mut offset, nonces);

    debug_assert_eq!(offset, len);
    tracing::debug!(
        balances = balances.len(),
        nonces = nonces.len(),
        bytes = len,
        "state encoded"
    );
    buf
}

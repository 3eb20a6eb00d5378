// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! State root hashing.
//!
//! The state root is SHA-256 over the canonical encoding, nothing more: no
//! domain prefix, no length suffix. Any implementation that produces the same
//! canonical bytes produces the same root.

use sha2::{Digest, Sha256};

use crate::config::STATE_TAG;
use crate::section::Section;
use crate::types::StateRoot;

/// SHA-256 of an arbitrary byte sequence.
pub fn hash_bytes(data: &[u8]) -> StateRoot {
    StateRoot(Sha256::digest(data).into())
}

/// Feeds the canonical layout straight into the hasher without building the
/// byte buffer first. Same result as `hash_bytes(&encode_state(..))`.
pub fn hash_sections(balances: &Section, nonces: &Section) -> StateRoot {
    let mut hasher = Sha256::new();

    hasher.update(STATE_TAG);
    for section in [balances, nonces] {
        hasher.update((section.len() as u64).to_le_bytes());
        for (addr, value) in section.sorted_entries() {
            hasher.update(addr.as_bytes());
            hasher.update(value.to_le_bytes());
        }
    }

    StateRoot(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::encode::encode_state;
    use crate::types::Address;

    #[test]
    fn test_hash_bytes_known_vector() {
        // FIPS 180-2 "abc"
        assert_eq!(
            hash_bytes(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_streaming_matches_buffered() {
        let balances: Section = (0..20u8)
            .map(|i| (Address([i.wrapping_mul(53); 32]), u64::from(i) * 1_000))
            .collect();
        let nonces: Section = (0..7u8).map(|i| (Address([255 - i; 32]), u64::from(i))).collect();

        assert_eq!(
            hash_sections(&balances, &nonces),
            hash_bytes(&encode_state(&balances, &nonces))
        );
        assert_eq!(
            hash_sections(&Section::new(), &Section::new()),
            hash_bytes(&encode_state(&Section::new(), &Section::new()))
        );
    }
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! State root digest.

use core::fmt;
use core::str::FromStr;

use crate::error::StateError;

/// SHA-256 digest of a canonical state encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct StateRoot(pub [u8; 32]);

impl StateRoot {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; 32]> for StateRoot {
    fn from(bytes: [u8; 32]) -> Self {
        StateRoot(bytes)
    }
}

impl fmt::Display for StateRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Accepts the same text forms as an address: optional `0x`, any case.
impl FromStr for StateRoot {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::types::address::parse(s).map(|a| StateRoot(a.0))
    }
}

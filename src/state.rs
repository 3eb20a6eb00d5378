// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Ledger state: the two sections plus everything derived from them.

use serde_json::Value;

use crate::error::{Result, StateError};
use crate::proof::StateCommitment;
use crate::section::{json_kind, Section, SectionKind};
use crate::snapshot::{encode_state, hash_bytes};
use crate::types::{AccountValue, Address, StateRoot};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerState {
    pub balances: Section,
    pub nonces: Section,
}

impl LedgerState {
    pub fn new(balances: Section, nonces: Section) -> Self {
        Self { balances, nonces }
    }

    /// Loads a state document: an object with optional `balances` and
    /// `nonces`. Any other top-level key is ignored.
    pub fn from_json(doc: &Value) -> Result<Self> {
        let object = doc.as_object().ok_or_else(|| StateError::InvalidSectionShape {
            context: "state document".to_owned(),
            expected: "an object",
            found: json_kind(doc),
        })?;

        let balances = SectionKind::Balances.load(object.get(SectionKind::Balances.key()))?;
        let nonces = SectionKind::Nonces.load(object.get(SectionKind::Nonces.key()))?;

        Ok(Self { balances, nonces })
    }

    /// Parses JSON text and loads it. Malformed JSON is reported as an
    /// invalid document shape.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let doc: Value =
            serde_json::from_str(text).map_err(|e| StateError::InvalidSectionShape {
                context: format!("state document ({e})"),
                expected: "valid JSON",
                found: "unparseable text",
            })?;
        Self::from_json(&doc)
    }

    pub fn section(&self, kind: SectionKind) -> &Section {
        match kind {
            SectionKind::Balances => &self.balances,
            SectionKind::Nonces => &self.nonces,
        }
    }

    pub fn balance_of(&self, addr: &Address) -> Option<&AccountValue> {
        self.balances.get(addr)
    }

    pub fn nonce_of(&self, addr: &Address) -> Option<&AccountValue> {
        self.nonces.get(addr)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        encode_state(&self.balances, &self.nonces)
    }

    /// StateRoot = SHA256(canonical_bytes(state))
    pub fn state_root(&self) -> StateRoot {
        hash_bytes(&self.canonical_bytes())
    }

    /// Canonical bytes and root in one pass, ready for output.
    pub fn commitment(&self) -> StateCommitment {
        let bytes = self.canonical_bytes();
        let root = hash_bytes(&bytes);
        StateCommitment::new(&bytes, root, self.balances.len(), self.nonces.len())
    }
}

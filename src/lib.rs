// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! cakechain-state: canonical encoding and state root of a Cakechain ledger state.
//!
//! Pipeline: JSON sections -> [`section::load`] -> [`snapshot::encode_state`]
//! -> [`snapshot::hash_bytes`]. Every stage is a pure function; only loading
//! can fail.

pub mod config;
pub mod error;
pub mod types;
pub mod section;
pub mod snapshot;
pub mod state;
pub mod proof;

pub use error::{Result, StateError};
pub use proof::StateCommitment;
pub use section::{Section, SectionKind};
pub use state::LedgerState;
pub use types::{Address, StateRoot};

/// Loads a state document and computes its commitment.
pub fn commit_json(doc: &serde_json::Value) -> Result<StateCommitment> {
    LedgerState::from_json(doc).map(|state| state.commitment())
}

#[cfg(test)]
pub mod tests;

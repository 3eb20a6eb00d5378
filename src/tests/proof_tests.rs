// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::proof::StateCommitment;
use crate::section::Section;
use crate::state::LedgerState;
use crate::tests::addr_last;
use crate::types::StateRoot;

const EMPTY_ROOT: &str = "6e26d8d2bfa538a000e3dcb62575201e65650953da76f6019ed7630669a4f991";

#[test]
fn test_empty_commitment_json_shape() {
    let commitment = LedgerState::default().commitment();
    let value = serde_json::to_value(&commitment).unwrap();

    assert_eq!(value["format_version"], "STATEv1");
    assert_eq!(value["state_root_hex"], EMPTY_ROOT);
    assert_eq!(value["canonical_len"], 23);
    assert_eq!(value["balances_count"], 0);
    assert_eq!(value["nonces_count"], 0);
    assert_eq!(
        value["canonical_bytes_hex"],
        "5354415445763100000000000000000000000000000000"
    );

    let back: StateCommitment = serde_json::from_value(value).unwrap();
    assert_eq!(back, commitment);
}

#[test]
fn test_root_matches_is_case_and_prefix_tolerant() {
    let commitment = LedgerState::default().commitment();
    assert!(commitment.root_matches(EMPTY_ROOT));
    assert!(commitment.root_matches(&format!("0x{}", EMPTY_ROOT.to_uppercase())));
    assert!(!commitment.root_matches(&EMPTY_ROOT[..63]));
    assert!(!commitment.root_matches(&"0".repeat(64)));
}

#[test]
fn test_state_root_text_forms() {
    let root: StateRoot = EMPTY_ROOT.parse().unwrap();
    assert_eq!(root, LedgerState::default().state_root());
    assert_eq!(root.to_string(), EMPTY_ROOT);

    let prefixed: StateRoot = format!("0X{}", EMPTY_ROOT.to_uppercase()).parse().unwrap();
    assert_eq!(prefixed, root);
}

#[test]
fn test_commitment_tracks_counts() {
    let balances: Section = (1..=3u8).map(|i| (addr_last(i), 10)).collect();
    let nonces: Section = [(addr_last(1), 1)].into_iter().collect();
    let state = LedgerState::new(balances, nonces);
    let commitment = state.commitment();

    assert_eq!(commitment.balances_count, 3);
    assert_eq!(commitment.nonces_count, 1);
    assert_eq!(commitment.canonical_len, 23 + 4 * 40);
    assert_eq!(commitment.canonical_bytes_hex, hex::encode(state.canonical_bytes()));
    assert_eq!(commitment.state_root_hex, state.state_root().to_hex());
}

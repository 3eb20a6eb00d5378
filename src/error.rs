// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

/// Every way a state computation can be rejected.
///
/// All variants are input-validation failures: encoding and hashing are
/// total once sections are loaded, so nothing here is retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("address must be a hex string, got {found}")]
    InvalidInputType { found: &'static str },

    #[error("address hex must be {expected} chars (32 bytes), got {found}: {input}")]
    InvalidAddressLength {
        input: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid hex in address: {input}")]
    InvalidAddressEncoding { input: String },

    #[error("missing '{field}' in entry #{index}")]
    MissingField { field: String, index: usize },

    #[error("{context} must be {expected}, got {found}")]
    InvalidSectionShape {
        context: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("value for {addr} must be an integer literal, got {found}")]
    InvalidValueType { addr: String, found: String },

    #[error("value {value} for {addr} is out of u64 range")]
    ValueOutOfRange { addr: String, value: String },

    #[error("keys {first:?} and {second:?} decode to the same address {addr}")]
    DuplicateAddress {
        addr: String,
        first: String,
        second: String,
    },

    #[error("bad format tag 0x{found}, expected STATEv1")]
    InvalidTag { found: String },

    #[error("canonical bytes truncated at offset {offset}: {needed} more bytes required")]
    Truncated { offset: usize, needed: usize },

    #[error("{count} trailing bytes after the nonces section")]
    TrailingBytes { count: usize },

    #[error("{section} entry #{index} ({addr}) does not sort strictly after its predecessor")]
    NonCanonicalOrder {
        section: &'static str,
        index: usize,
        addr: String,
    },

    #[error("invalid {section} section")]
    Section {
        section: &'static str,
        #[source]
        source: Box<StateError>,
    },
}

impl StateError {
    /// Wraps `self` with the name of the section being loaded.
    pub fn in_section(self, section: &'static str) -> Self {
        StateError::Section {
            section,
            source: Box::new(self),
        }
    }

    /// The underlying failure with any section context peeled off.
    pub fn root_cause(&self) -> &StateError {
        match self {
            StateError::Section { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Section name attached to this error, if any.
    pub fn section(&self) -> Option<&'static str> {
        match self {
            StateError::Section { section, .. } => Some(section),
            _ => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, StateError>;

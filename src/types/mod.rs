// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod address;
pub mod root;

pub use address::Address;
pub use root::StateRoot;

/// A balance or a nonce. Always serialized as u64 little-endian.
pub type AccountValue = u64;

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod encode;
pub mod decode;
pub mod hash;

pub use decode::decode_state;
pub use encode::encode_state;
pub use hash::{hash_bytes, hash_sections};

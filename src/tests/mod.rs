pub mod proof_tests;

use crate::types::Address;

/// Address whose only non-zero byte is the last one.
pub(crate) fn addr_last(b: u8) -> Address {
    let mut bytes = [0u8; 32];
    bytes[31] = b;
    Address(bytes)
}

/// 64-char hex text of [`addr_last`].
pub(crate) fn hex_last(b: u8) -> String {
    addr_last(b).to_hex()
}

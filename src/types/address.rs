// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! 32-byte account addresses and their hex text form.

use core::fmt;
use core::str::FromStr;

use serde_json::Value;

use crate::config::{ADDRESS_HEX_LEN, ADDRESS_LEN};
use crate::error::{Result, StateError};
use crate::section::json_kind;

/// Account address. Orders by unsigned byte comparison, byte 0 first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Address(pub [u8; ADDRESS_LEN]);

impl Address {
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Address(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Lowercase hex, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn to_prefixed_hex(&self) -> String {
        format!("0x{}", self.to_hex())
    }
}

/// Parses a textual address.
///
/// One leading `0x`/`0X` is stripped and the rest is case-folded; what
/// remains must be exactly 64 hex digits.
pub fn parse(text: &str) -> Result<Address> {
    let body = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    let found = body.chars().count();
    if found != ADDRESS_HEX_LEN {
        return Err(StateError::InvalidAddressLength {
            input: text.to_owned(),
            expected: ADDRESS_HEX_LEN,
            found,
        });
    }

    let mut out = [0u8; ADDRESS_LEN];
    hex::decode_to_slice(body.to_ascii_lowercase(), &mut out).map_err(|_| {
        StateError::InvalidAddressEncoding {
            input: text.to_owned(),
        }
    })?;
    Ok(Address(out))
}

/// Parses an address out of a dynamic JSON value, which must be a string.
pub fn parse_value(value: &Value) -> Result<Address> {
    match value {
        Value::String(text) => parse(text),
        other => Err(StateError::InvalidInputType {
            found: json_kind(other),
        }),
    }
}

impl FromStr for Address {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Address(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for b in self.0.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr_with_last(b: u8) -> Address {
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes[ADDRESS_LEN - 1] = b;
        Address(bytes)
    }

    #[test]
    fn test_parse_accepts_prefix_and_mixed_case() {
        let plain = "ab".repeat(32);
        let upper = format!("0X{}", "AB".repeat(32));
        let mixed = format!("0x{}", "aB".repeat(32));

        let a = parse(&plain).unwrap();
        assert_eq!(a, parse(&upper).unwrap());
        assert_eq!(a, parse(&mixed).unwrap());
        assert_eq!(a.as_bytes(), &[0xab; ADDRESS_LEN]);
    }

    #[test]
    fn test_hex_round_trip() {
        let mut bytes = [0u8; ADDRESS_LEN];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(37).wrapping_add(11);
        }
        let a = Address(bytes);
        assert_eq!(parse(&a.to_hex()).unwrap(), a);
        assert_eq!(parse(&a.to_prefixed_hex()).unwrap(), a);
        assert_eq!(parse(&a.to_hex().to_uppercase()).unwrap(), a);
    }

    #[test]
    fn test_short_address_is_length_error() {
        let err = parse(&"0".repeat(63)).unwrap_err();
        assert_eq!(
            err,
            StateError::InvalidAddressLength {
                input: "0".repeat(63),
                expected: 64,
                found: 63,
            }
        );
    }

    #[test]
    fn test_only_one_prefix_is_stripped() {
        let text = format!("0x0x{}", "0".repeat(62));
        assert!(matches!(
            parse(&text),
            Err(StateError::InvalidAddressEncoding { .. })
        ));
    }

    #[test]
    fn test_non_hex_is_encoding_error() {
        let text = format!("{}g", "0".repeat(63));
        assert!(matches!(
            parse(&text),
            Err(StateError::InvalidAddressEncoding { .. })
        ));

        // 64 characters, but not all ASCII.
        let text = format!("{}é", "0".repeat(63));
        assert!(matches!(
            parse(&text),
            Err(StateError::InvalidAddressEncoding { .. })
        ));
    }

    #[test]
    fn test_non_string_value_is_type_error() {
        let err = parse_value(&serde_json::json!(12)).unwrap_err();
        assert_eq!(err, StateError::InvalidInputType { found: "number" });
    }

    #[test]
    fn test_display_and_ordering() {
        let one = addr_with_last(1);
        let two = addr_with_last(2);
        assert!(one < two);
        assert_eq!(format!("{}", one), format!("{}01", "0".repeat(62)));
        assert_eq!(format!("{:#x}", two), format!("0x{}02", "0".repeat(62)));

        let mut high = [0u8; ADDRESS_LEN];
        high[0] = 0x80;
        assert!(Address(high) > two, "byte 0 is most significant");
    }
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Canonical state decoding.
//!
//! Strict inverse of [`encode_state`](super::encode::encode_state): only byte
//! sequences the encoder could have produced are accepted, so
//! `encode(decode(b)) == b` for every `b` that decodes.

use byteorder::{ByteOrder, LittleEndian};

use crate::config::{ADDRESS_LEN, ENTRY_LEN, STATE_TAG, U64_LEN};
use crate::error::{Result, StateError};
use crate::section::{Section, SectionKind};
use crate::state::LedgerState;
use crate::types::Address;

fn take<'a>(buf: &'a [u8], offset: &mut usize, len: usize) -> Result<&'a [u8]> {
    let remaining = buf.len() - *offset;
    if len > remaining {
        return Err(StateError::Truncated {
            offset: *offset,
            needed: len - remaining,
        });
    }
    let out = &buf[*offset..*offset + len];
    *offset += len;
    Ok(out)
}

fn read_u64(buf: &[u8], offset: &mut usize) -> Result<u64> {
    take(buf, offset, U64_LEN).map(LittleEndian::read_u64)
}

fn read_section(buf: &[u8], offset: &mut usize, kind: SectionKind) -> Result<Section> {
    let count = read_u64(buf, offset)?;

    // Bound the count by what is left before trusting it.
    let remaining = (buf.len() - *offset) as u64;
    let body = count.saturating_mul(ENTRY_LEN as u64);
    if body > remaining {
        return Err(StateError::Truncated {
            offset: *offset,
            needed: usize::try_from(body - remaining).unwrap_or(usize::MAX),
        });
    }

    let mut section = Section::new();
    let mut previous: Option<Address> = None;

    for index in 0..count as usize {
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(take(buf, offset, ADDRESS_LEN)?);
        let addr = Address::from_bytes(bytes);
        let value = read_u64(buf, offset)?;

        if previous.is_some_and(|p| p >= addr) {
            return Err(StateError::NonCanonicalOrder {
                section: kind.key(),
                index,
                addr: addr.to_hex(),
            });
        }
        previous = Some(addr);
        section.insert(addr, value);
    }

    Ok(section)
}

/// Decodes canonical bytes back into a ledger state.
pub fn decode_state(buf: &[u8]) -> Result<LedgerState> {
    let mut offset = 0;

    let tag = take(buf, &mut offset, STATE_TAG.len())
        .map_err(|_| StateError::InvalidTag { found: hex::encode(buf) })?;
    if tag != STATE_TAG {
        return Err(StateError::InvalidTag { found: hex::encode(tag) });
    }

    let balances = read_section(buf, &mut offset, SectionKind::Balances)?;
    let nonces = read_section(buf, &mut offset, SectionKind::Nonces)?;

    if offset != buf.len() {
        return Err(StateError::TrailingBytes {
            count: buf.len() - offset,
        });
    }

    Ok(LedgerState { balances, nonces })
}

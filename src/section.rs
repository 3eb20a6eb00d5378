// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Section loading: turns list-form or mapping-form input into a keyed section.
//!
//! Two input shapes are accepted for each section:
//!
//! ```text
//! [{"addr": "<64-hex>", "<value_field>": <u64>}, ...]   // list form
//! {"<64-hex>": <u64>, ...}                              // mapping form
//! ```
//!
//! Both resolve to the same [`Section`]. List form upserts in literal order, so
//! a repeated address keeps its last value. Mapping form rejects two keys that
//! spell the same address differently, since there is no meaningful "last" one.
//!
//! A key repeated byte-for-byte in one JSON object is not seen here:
//! `serde_json` keeps its last occurrence while building the object, so that
//! case behaves like list form.

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};

use crate::config::{ADDR_FIELD, AMOUNT_FIELD, BALANCES_KEY, NONCES_KEY, NONCE_FIELD};
use crate::error::{Result, StateError};
use crate::types::address::{self, Address};
use crate::types::AccountValue;

/// One logical section of the ledger state: address -> value, keys unique.
///
/// Iteration order of the backing map is arbitrary and never reaches the
/// encoder; use [`Section::sorted_entries`] for anything order-sensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Section {
    entries: FxHashMap<Address, AccountValue>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts `value`, returning the value it replaced.
    pub fn insert(&mut self, addr: Address, value: AccountValue) -> Option<AccountValue> {
        self.entries.insert(addr, value)
    }

    pub fn get(&self, addr: &Address) -> Option<&AccountValue> {
        self.entries.get(addr)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending address order.
    pub fn sorted_entries(&self) -> Vec<(Address, AccountValue)> {
        let mut out: Vec<_> = self.entries.iter().map(|(a, v)| (*a, *v)).collect();
        out.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        out
    }
}

/// Builds a section from typed pairs; a repeated address keeps its last value.
impl FromIterator<(Address, AccountValue)> for Section {
    fn from_iter<I: IntoIterator<Item = (Address, AccountValue)>>(iter: I) -> Self {
        let mut section = Section::new();
        section.extend(iter);
        section
    }
}

impl Extend<(Address, AccountValue)> for Section {
    fn extend<I: IntoIterator<Item = (Address, AccountValue)>>(&mut self, iter: I) {
        for (addr, value) in iter {
            self.entries.insert(addr, value);
        }
    }
}

/// The two sections of a ledger state, in encoding order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Balances,
    Nonces,
}

impl SectionKind {
    pub const ALL: [SectionKind; 2] = [SectionKind::Balances, SectionKind::Nonces];

    /// Top-level document key.
    pub fn key(self) -> &'static str {
        match self {
            SectionKind::Balances => BALANCES_KEY,
            SectionKind::Nonces => NONCES_KEY,
        }
    }

    /// Value field of a list-form record.
    pub fn value_field(self) -> &'static str {
        match self {
            SectionKind::Balances => AMOUNT_FIELD,
            SectionKind::Nonces => NONCE_FIELD,
        }
    }

    /// Loads this section, tagging any failure with the section name.
    pub fn load(self, input: Option<&Value>) -> Result<Section> {
        load(input, self.value_field()).map_err(|e| e.in_section(self.key()))
    }
}

/// Input shape of a section, resolved once before any entry is parsed.
#[derive(Clone, Copy, Debug)]
pub enum RawSection<'a> {
    Records(&'a [Value]),
    Mapping(&'a Map<String, Value>),
}

impl<'a> RawSection<'a> {
    /// `None` means the section is absent (missing key or JSON `null`).
    pub fn classify(input: Option<&'a Value>) -> Result<Option<Self>> {
        match input {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) => Ok(Some(RawSection::Records(items))),
            Some(Value::Object(map)) => Ok(Some(RawSection::Mapping(map))),
            Some(other) => Err(StateError::InvalidSectionShape {
                context: "section".to_owned(),
                expected: "a list or a mapping",
                found: json_kind(other),
            }),
        }
    }
}

/// Loads one section. `value_field` names the value key of list-form records.
pub fn load(input: Option<&Value>, value_field: &str) -> Result<Section> {
    let section = match RawSection::classify(input)? {
        None => Section::new(),
        Some(RawSection::Records(items)) => load_records(items, value_field)?,
        Some(RawSection::Mapping(map)) => load_mapping(map)?,
    };
    tracing::debug!(field = value_field, entries = section.len(), "section loaded");
    Ok(section)
}

fn load_records(items: &[Value], value_field: &str) -> Result<Section> {
    let mut section = Section::new();

    for (index, item) in items.iter().enumerate() {
        let record = item
            .as_object()
            .ok_or_else(|| StateError::InvalidSectionShape {
                context: format!("entry #{index}"),
                expected: "an object",
                found: json_kind(item),
            })?;

        let addr_value = record.get(ADDR_FIELD).ok_or_else(|| missing(ADDR_FIELD, index))?;
        let raw_value = record.get(value_field).ok_or_else(|| missing(value_field, index))?;

        let addr = address::parse_value(addr_value)?;
        let value = parse_account_value(raw_value, &addr)?;

        if let Some(previous) = section.insert(addr, value) {
            tracing::trace!(%addr, previous, value, "later record overrides earlier one");
        }
    }

    Ok(section)
}

fn load_mapping(map: &Map<String, Value>) -> Result<Section> {
    let mut section = Section::new();
    let mut spelled: FxHashMap<Address, &str> = FxHashMap::default();

    for (key, raw_value) in map {
        let addr = address::parse(key)?;
        if let Some(first) = spelled.insert(addr, key.as_str()) {
            return Err(StateError::DuplicateAddress {
                addr: addr.to_hex(),
                first: first.to_owned(),
                second: key.clone(),
            });
        }
        let value = parse_account_value(raw_value, &addr)?;
        section.insert(addr, value);
    }

    Ok(section)
}

fn missing(field: &str, index: usize) -> StateError {
    StateError::MissingField {
        field: field.to_owned(),
        index,
    }
}

/// Parses a balance or nonce.
///
/// Only integer literals qualify. The check runs on the literal text, so
/// `18446744073709551616` is out of range rather than a float, and `1.0` is a
/// type error rather than one. `-0` is zero.
pub fn parse_account_value(value: &Value, addr: &Address) -> Result<AccountValue> {
    let Value::Number(number) = value else {
        return Err(StateError::InvalidValueType {
            addr: addr.to_hex(),
            found: json_kind(value).to_owned(),
        });
    };

    let text = number.to_string();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.as_str()),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(StateError::InvalidValueType {
            addr: addr.to_hex(),
            found: format!("number {text}"),
        });
    }

    let out_of_range = || StateError::ValueOutOfRange {
        addr: addr.to_hex(),
        value: text.clone(),
    };

    if negative {
        return if digits.bytes().all(|b| b == b'0') {
            Ok(0)
        } else {
            Err(out_of_range())
        };
    }

    digits.parse::<AccountValue>().map_err(|_| out_of_range())
}

/// JSON type name used in error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

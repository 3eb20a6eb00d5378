// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Reads a JSON state document from `path`, or from stdin when `path` is `-`.
pub fn read_document(path: &Path) -> Result<Value> {
    if path.as_os_str() == "-" {
        tracing::debug!("reading state document from stdin");
        return read_document_from(io::stdin().lock(), "stdin");
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open state file {}", path.display()))?;
    let doc = read_document_from(BufReader::new(file), &path.display().to_string())?;
    tracing::debug!(path = %path.display(), "state document read");
    Ok(doc)
}

/// Parses a JSON state document from any reader; `source` names it in errors.
pub fn read_document_from(reader: impl Read, source: &str) -> Result<Value> {
    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse state JSON from {source}"))
}

/// Decodes hex text into bytes. Surrounding whitespace and one `0x` prefix are ignored.
pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
    let text = text.trim();
    let body = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    hex::decode(body).context("Canonical bytes are not valid hex")
}

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::store;
use crate::transcript::Conversation;

pub fn load(path: &Path) -> Result<Vec<Conversation>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse corpus file {}", path.display()))
}

/// Four-space indent to stay byte-compatible with corpora written by the
/// earlier extraction tooling.
pub fn save(conversations: &[Conversation], path: &Path) -> Result<()> {
    let mut data = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut data, formatter);
    conversations
        .serialize(&mut serializer)
        .context("Failed to serialize corpus")?;
    store::write_atomic(path, &data)
}

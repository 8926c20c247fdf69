use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::corpus;
use crate::transcript;

/// One dataset row. The dataset is JSON lines, one object per conversation;
/// only the `conversation` field matters here.
#[derive(Deserialize)]
struct TranscriptRow {
    conversation: String,
}

pub fn run(input: &Path, output: &Path) -> Result<()> {
    let file = std::fs::File::open(input)
        .with_context(|| format!("Failed to open dataset file {}", input.display()))?;
    let reader = BufReader::new(file);

    let mut conversations = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read dataset line")?;
        if line.trim().is_empty() {
            continue;
        }
        // A row missing the conversation field aborts the run; a half-extracted
        // corpus is worse than no corpus.
        let row: TranscriptRow = serde_json::from_str(&line)
            .with_context(|| format!("Malformed dataset row on line {}", number + 1))?;
        conversations.push(transcript::parse_transcript(&row.conversation));
    }

    corpus::save(&conversations, output)?;

    println!(
        "Extracted {} conversations to {}.",
        conversations.len(),
        output.display()
    );

    Ok(())
}

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::checkpoint::Checkpoint;
use crate::corpus;
use crate::store;
use crate::transcript::{Conversation, Message};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct ReplayRequest<'a> {
    messages: &'a [Message],
}

/// Send at most one unsent conversation to the endpoint. Single attempt, no
/// retry: a failed run leaves the checkpoint where it was, so the next run
/// resends the same conversation (at-least-once delivery).
pub async fn run(corpus_path: &Path, checkpoint_path: &Path, endpoint: &str) -> Result<()> {
    let conversations = corpus::load(corpus_path)?;

    // Held across read-compare-write so two concurrent runs cannot both pick
    // up the same index and silently skip a conversation.
    let _lock = store::lock_file(&lock_path(checkpoint_path))?;

    let mut checkpoint = Checkpoint::load_or_init(checkpoint_path)?;
    let Some(conversation) = next_unsent(&conversations, &checkpoint) else {
        println!("All {} conversations uploaded.", conversations.len());
        return Ok(());
    };

    println!(
        "Uploading conversation {}/{}…",
        checkpoint.last_index + 1,
        conversations.len()
    );

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    let response = client
        .post(endpoint)
        .json(&ReplayRequest {
            messages: &conversation.messages,
        })
        .send()
        .await
        .with_context(|| format!("Failed to reach the chat endpoint at {endpoint}"))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read the endpoint response body")?;

    if !status.is_success() {
        anyhow::bail!("Upload failed with status {status}:\n{body}");
    }

    // The new index must be on disk before this run may claim success.
    checkpoint.advance();
    checkpoint.save(checkpoint_path)?;

    println!("Request was successful!");
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(parsed) => println!("Response: {parsed}"),
        Err(_) => println!("Response: {body}"),
    }

    Ok(())
}

fn next_unsent<'a>(
    conversations: &'a [Conversation],
    checkpoint: &Checkpoint,
) -> Option<&'a Conversation> {
    conversations.get(checkpoint.last_index)
}

fn lock_path(checkpoint_path: &Path) -> PathBuf {
    checkpoint_path.with_extension("lock")
}

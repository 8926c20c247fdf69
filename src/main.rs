mod checkpoint;
mod corpus;
mod extract;
mod replay;
mod store;
mod transcript;

use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Deserialize, Debug)]
struct Environment {
    chat_endpoint: Option<String>,
}

#[derive(StructOpt, Debug)]
#[structopt(
    name = "conversation-replay",
    about = "Extract customer-support conversations and replay them against a chat API"
)]
enum Args {
    /// Parse a JSONL dataset of support transcripts into a message corpus
    Extract {
        /// Path to the dataset, one JSON row with a `conversation` field per line
        #[structopt(short, long)]
        input: PathBuf,

        /// Where to write the corpus
        #[structopt(short, long, default_value = "output_messages.json")]
        output: PathBuf,
    },

    /// Upload the next not-yet-sent conversation to the chat endpoint
    ReplayNext {
        /// Path to the corpus produced by `extract`
        #[structopt(short, long, default_value = "output_messages.json")]
        corpus: PathBuf,

        /// Path to the checkpoint file tracking upload progress
        #[structopt(short = "k", long, default_value = "last_uploaded_index.txt")]
        checkpoint: PathBuf,

        /// Chat endpoint URL, e.g. http://localhost:3000/api/chats/<chat_id>/messages
        #[structopt(short, long)]
        endpoint: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let environment = envy::from_env::<Environment>()?;

    match Args::from_args() {
        Args::Extract { input, output } => extract::run(&input, &output),
        Args::ReplayNext {
            corpus,
            checkpoint,
            endpoint,
        } => {
            let endpoint = endpoint
                .or(environment.chat_endpoint)
                .context("No chat endpoint configured; pass --endpoint or set CHAT_ENDPOINT")?;
            replay::run(&corpus, &checkpoint, &endpoint).await
        }
    }
}

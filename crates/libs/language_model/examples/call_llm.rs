#![allow(clippy::missing_errors_doc)]

use color_eyre::eyre::Result;
use language_model::{CompletionClient, CompletionRequest, LlamaClient};
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run() -> Result<()> {
    let client = LlamaClient::with_base_url("http://localhost:8080")
        .timeout(Duration::from_secs(60))
        .build()?;
    let prompt = "Suggest 5 short hashtags for a baby photo taken in the park at 6 months old. \
        Respond with a JSON array of strings only.";

    let now = Instant::now();
    let response = client
        .generate_completion(CompletionRequest::new(prompt))
        .await?;
    info!("Tags: {} (finish reason: {})", response.text, response.finish_reason);

    let response = client
        .generate_completion(CompletionRequest::new(prompt).with_temperature(0.1))
        .await?;
    info!("Tags at low temperature: {}", response.text);

    info!("Total time for [API]: {:?}", now.elapsed());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    color_eyre::install()?;

    run().await?;

    Ok(())
}

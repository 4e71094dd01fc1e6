//! Basic usage: check the quota, synthesize a line, save the audio.
//!
//! The API key is resolved from the builder, the OS keyring or
//! TTSMONSTER_API_KEY; see `TtsMonsterClientBuilder::from_env` for the rest.
//!
//! Usage:
//!   TTSMONSTER_API_KEY="your_key" cargo run --example basic_usage -- "Hello there!"

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use tts_monster::{PublicVoice, TtsMonsterClientBuilder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let message = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Hello from the TTS.Monster Rust client!".to_string());

    let mut client = TtsMonsterClientBuilder::from_env()
        .build()
        .await
        .context("failed to create client")?;

    if let Some(remaining) = client.quota().remaining() {
        println!("Characters left this period: {remaining}");
    }

    let generated = client.generate(PublicVoice::Narrator, &message).await?;
    println!("Audio URL: {}", generated.url);

    let audio = client.download_audio(&generated).await?;
    std::fs::write("output.wav", &audio).context("failed to write output.wav")?;
    println!("Saved {} bytes to output.wav", audio.len());

    println!("Usage now: {}", client.quota().usage());
    Ok(())
}

//! List available voices and compare the public ones with the built-in registry.
//!
//! Usage:
//!   TTSMONSTER_API_KEY="your_key" cargo run --example list_voices

use tts_monster::voices::PublicVoice;
use tts_monster::TtsMonsterClientBuilder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Listing voices does not need the character quota.
    let mut client = TtsMonsterClientBuilder::from_env()
        .enforce_char_quota(false)
        .build()
        .await?;

    let listing = client.get_voices().await?;

    println!("Public voices:");
    for voice in &listing.voices {
        let status = match PublicVoice::from_name(&voice.name) {
            Some(known) if known.id() == voice.voice_id => "ok",
            Some(_) => "ID differs from registry",
            None => "not in registry",
        };
        println!("- {:<12} {}  [{}]", voice.name, voice.voice_id, status);
    }

    for known in PublicVoice::ALL {
        if listing.find(known.name()).is_none() {
            println!("- {:<12} {}  [missing from listing]", known.name(), known.id());
        }
    }

    if !listing.custom_voices.is_empty() {
        println!("\nCustom voices:");
        for voice in &listing.custom_voices {
            println!("- {:<12} {}", voice.name, voice.voice_id);
        }
    }

    Ok(())
}

//! # tts-monster
//!
//! Async client for the [TTS.Monster](https://tts.monster) text-to-speech API.
//!
//! ## Overview
//!
//! The client wraps the three public endpoints:
//!
//! - **generate**: synthesize speech, returning a URL to the audio
//! - **user**: account plan and character quota
//! - **voices**: public and custom voices
//!
//! Before anything is sent, local guards try to keep the caller inside the
//! service's limits: a per-endpoint call-rate limiter and, unless disabled, a
//! character quota check that refuses requests which would be billed as
//! overage. Both are best-effort; the server has the final word.
//!
//! Voice cloning is not supported.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tts_monster::{PublicVoice, TtsMonsterClient};
//!
//! #[tokio::main]
//! async fn main() -> tts_monster::Result<()> {
//!     let mut client = TtsMonsterClient::builder()
//!         .api_key("your-api-key")
//!         .build()
//!         .await?;
//!
//!     let generated = client.generate(PublicVoice::Narrator, "Hello there!").await?;
//!     println!("audio at {}", generated.url);
//!     println!("{:?} characters left", client.quota().remaining());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder and endpoint definitions |
//! | [`resilience`] | Rate limiter and quota tracker |
//! | [`transport`] | Authenticated HTTP dispatch |
//! | [`types`] | Request and response bodies |
//! | [`voices`] | Static registry of public voice IDs |

pub mod client;
pub mod resilience;
pub mod transport;
pub mod types;
pub mod voices;

pub use client::{Endpoint, TtsMonsterClient, TtsMonsterClientBuilder};
pub use resilience::{QuotaTracker, RateLimit, RateLimitPolicy};
pub use types::{GenerateRequest, GenerateResponse, UserInfo, Voice, VoicesResponse};
pub use voices::PublicVoice;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};

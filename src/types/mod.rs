//! # Types Module
//!
//! Request and response bodies for the TTS.Monster endpoints.
//!
//! | Type | Endpoint | Description |
//! |------|----------|-------------|
//! | [`GenerateRequest`] | `generate` | Voice ID, message and usage flag |
//! | [`GenerateResponse`] | `generate` | Audio URL and characters consumed |
//! | [`UserInfo`] | `user` | Plan, status and character quota |
//! | [`VoicesResponse`] | `voices` | Public and custom voice listings |
//!
//! ## Example
//!
//! ```rust
//! use tts_monster::types::GenerateRequest;
//! use tts_monster::voices::PublicVoice;
//!
//! let request = GenerateRequest::new(PublicVoice::Narrator, "Hello there").return_usage(true);
//! assert_eq!(request.voice_id, PublicVoice::Narrator.id());
//! ```

pub mod generate;
pub mod user;
pub mod voice;

pub use generate::{GenerateRequest, GenerateResponse};
pub use user::UserInfo;
pub use voice::{Voice, VoicesResponse};

//! TTS.Monster client.
//!
//! The public surface is [`TtsMonsterClient`] and its builder. Implementation
//! details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
pub mod endpoint;

pub use builder::{TtsMonsterClientBuilder, DEFAULT_BASE_URL};
pub use self::core::TtsMonsterClient;
pub use endpoint::Endpoint;

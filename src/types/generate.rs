//! Speech generation request and response.

use serde::{Deserialize, Serialize};

/// Maximum message length accepted by the `generate` endpoint, in characters.
pub const MAX_MESSAGE_CHARS: usize = 500;

/// Body of a `generate` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub voice_id: String,
    pub message: String,
    pub return_usage: bool,
}

impl GenerateRequest {
    /// `voice` is a voice ID, or anything that yields one such as a
    /// [`PublicVoice`](crate::voices::PublicVoice).
    pub fn new(voice: impl AsRef<str>, message: impl Into<String>) -> Self {
        Self {
            voice_id: voice.as_ref().to_string(),
            message: message.into(),
            return_usage: true,
        }
    }

    pub fn return_usage(mut self, enable: bool) -> Self {
        self.return_usage = enable;
        self
    }

    /// Length of the message as the service counts it (Unicode scalar values).
    pub fn char_count(&self) -> usize {
        self.message.chars().count()
    }
}

/// Result of a `generate` call. The audio itself is hosted at `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub status: Option<u16>,
    pub url: String,
    /// Characters billed for this request, present when usage was requested.
    #[serde(rename = "characterUsage", default)]
    pub character_usage: Option<u64>,
}

//! Static registry of TTS.Monster public voices.
//!
//! Lets callers refer to voices by name instead of hardcoding IDs. The table
//! is immutable.
//!
//! The IDs below are placeholders in UUID format and have not been checked
//! against TTS.Monster. Until they are synced with the live `voices` listing
//! (the `list_voices` demo prints any mismatch), prefer IDs returned by
//! [`TtsMonsterClient::get_voices`](crate::TtsMonsterClient::get_voices).
//!
//! ```rust
//! use tts_monster::voices::{self, PublicVoice};
//!
//! assert_eq!(PublicVoice::from_name("narrator"), Some(PublicVoice::Narrator));
//! assert_eq!(voices::lookup("Narrator"), Some(PublicVoice::Narrator.id()));
//! ```

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// A public voice name. See the module docs for the status of the IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicVoice {
    Atlas,
    Axel,
    Breeze,
    Circuit,
    Commander,
    Glitch,
    Hyperion,
    Jazz,
    Kawaii,
    Leader,
    Mentor,
    Narrator,
    Scout,
    Sentinel,
    Spectral,
    Whisper,
    Witch,
    Wizard,
    Zeus,
}

impl PublicVoice {
    pub const ALL: &'static [PublicVoice] = &[
        PublicVoice::Atlas,
        PublicVoice::Axel,
        PublicVoice::Breeze,
        PublicVoice::Circuit,
        PublicVoice::Commander,
        PublicVoice::Glitch,
        PublicVoice::Hyperion,
        PublicVoice::Jazz,
        PublicVoice::Kawaii,
        PublicVoice::Leader,
        PublicVoice::Mentor,
        PublicVoice::Narrator,
        PublicVoice::Scout,
        PublicVoice::Sentinel,
        PublicVoice::Spectral,
        PublicVoice::Whisper,
        PublicVoice::Witch,
        PublicVoice::Wizard,
        PublicVoice::Zeus,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PublicVoice::Atlas => "Atlas",
            PublicVoice::Axel => "Axel",
            PublicVoice::Breeze => "Breeze",
            PublicVoice::Circuit => "Circuit",
            PublicVoice::Commander => "Commander",
            PublicVoice::Glitch => "Glitch",
            PublicVoice::Hyperion => "Hyperion",
            PublicVoice::Jazz => "Jazz",
            PublicVoice::Kawaii => "Kawaii",
            PublicVoice::Leader => "Leader",
            PublicVoice::Mentor => "Mentor",
            PublicVoice::Narrator => "Narrator",
            PublicVoice::Scout => "Scout",
            PublicVoice::Sentinel => "Sentinel",
            PublicVoice::Spectral => "Spectral",
            PublicVoice::Whisper => "Whisper",
            PublicVoice::Witch => "Witch",
            PublicVoice::Wizard => "Wizard",
            PublicVoice::Zeus => "Zeus",
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            PublicVoice::Atlas => "fa76de34-1e64-4f4b-a66d-7383666942ee",
            PublicVoice::Axel => "73570284-7289-4cf8-9b68-ad82b8523e55",
            PublicVoice::Breeze => "004cdd65-039e-4f15-9cdc-e9a34416c8a5",
            PublicVoice::Circuit => "671e2572-0cdd-471f-ad38-f981ffa9e16c",
            PublicVoice::Commander => "84567181-0576-402d-960e-05c80493a03c",
            PublicVoice::Glitch => "2cb3efac-0d4f-42c9-8fe8-3ceac7a75da3",
            PublicVoice::Hyperion => "3cd1181a-248b-4122-91c0-5d8cb94623c1",
            PublicVoice::Jazz => "6846febd-75cd-40d6-bdee-2d0ca79babf9",
            PublicVoice::Kawaii => "04ea3c90-2d1a-4e69-912a-a65f39e4c086",
            PublicVoice::Leader => "fc3dce2b-fa8b-476b-9ffb-87a66a375c9c",
            PublicVoice::Mentor => "914ea25b-442a-4f9d-9577-1a8f4d1a0ef8",
            PublicVoice::Narrator => "eff99124-c804-4303-bc86-dda0e295d0bf",
            PublicVoice::Scout => "a8c6eae7-a59e-4c26-accc-4237c5c0ee52",
            PublicVoice::Sentinel => "7aeaa425-ea8c-4dab-997f-066d427e146f",
            PublicVoice::Spectral => "29d1165e-6855-4be1-8900-a210a6314237",
            PublicVoice::Whisper => "57c53da3-8094-4553-84ba-37be00acd2b6",
            PublicVoice::Witch => "d403f114-e509-44f5-9697-39b8ac4b43ac",
            PublicVoice::Wizard => "84b33613-c88a-4e66-8ff1-20617d4fc9a9",
            PublicVoice::Zeus => "25bd3a8a-a0db-42d3-98c6-908f39890e71",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        BY_NAME.get(name.to_ascii_lowercase().as_str()).copied()
    }

    pub fn from_id(id: &str) -> Option<Self> {
        BY_ID.get(id).copied()
    }
}

static BY_NAME: Lazy<HashMap<String, PublicVoice>> = Lazy::new(|| {
    PublicVoice::ALL
        .iter()
        .map(|v| (v.name().to_ascii_lowercase(), *v))
        .collect()
});

static BY_ID: Lazy<HashMap<&'static str, PublicVoice>> =
    Lazy::new(|| PublicVoice::ALL.iter().map(|v| (v.id(), *v)).collect());

/// Voice ID for a public voice name, ignoring case.
pub fn lookup(name: &str) -> Option<&'static str> {
    PublicVoice::from_name(name).map(PublicVoice::id)
}

impl AsRef<str> for PublicVoice {
    fn as_ref(&self) -> &str {
        self.id()
    }
}

impl fmt::Display for PublicVoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

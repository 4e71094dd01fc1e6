//! Voice listings returned by the `voices` endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    pub voice_id: String,
    pub name: String,
    /// URL of a short audio sample.
    #[serde(default)]
    pub sample: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VoicesResponse {
    #[serde(default)]
    pub voices: Vec<Voice>,
    #[serde(rename = "customVoices", default)]
    pub custom_voices: Vec<Voice>,
}

impl VoicesResponse {
    /// Find a public or custom voice by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Voice> {
        self.voices
            .iter()
            .chain(self.custom_voices.iter())
            .find(|v| v.name.eq_ignore_ascii_case(name))
    }
}

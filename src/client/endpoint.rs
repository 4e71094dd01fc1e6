//! The three TTS.Monster endpoints and their default call-rate limits.

use crate::resilience::rate_limiter::RateLimit;
use std::fmt;
use std::time::Duration;

/// An API endpoint. Every endpoint is called with `POST {base_url}{path}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Generate,
    User,
    Voices,
}

impl Endpoint {
    pub const ALL: [Endpoint; 3] = [Endpoint::Generate, Endpoint::User, Endpoint::Voices];

    /// Path relative to the base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Generate => "generate",
            Endpoint::User => "user",
            Endpoint::Voices => "voices",
        }
    }

    /// Published per-account limits: 30 generate calls and 50 user/voices
    /// calls per minute.
    pub fn default_rate_limit(self) -> RateLimit {
        let count = match self {
            Endpoint::Generate => 30,
            Endpoint::User | Endpoint::Voices => 50,
        };
        RateLimit::per_period(count, Duration::from_secs(60))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

use super::core::TtsMonsterClient;
use super::endpoint::Endpoint;
use crate::resilience::{QuotaTracker, RateLimit, RateLimitPolicy, RateLimiter};
use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};
use keyring::Entry;
use std::env;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.console.tts.monster/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub const API_KEY_ENV: &str = "TTSMONSTER_API_KEY";
pub const BASE_URL_ENV: &str = "TTSMONSTER_BASE_URL";
pub const TIMEOUT_ENV: &str = "TTSMONSTER_TIMEOUT_SECS";
pub const ENFORCE_QUOTA_ENV: &str = "TTSMONSTER_ENFORCE_QUOTA";

const KEYRING_SERVICE: &str = "tts-monster";
const KEYRING_USER: &str = "api-key";

/// Builder for [`TtsMonsterClient`].
///
/// Character quota enforcement is on by default. Unless an allowance is
/// configured locally, [`build`](Self::build) then fetches it from the
/// `user` endpoint, which also validates the API key.
pub struct TtsMonsterClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Duration,
    enforce_char_quota: bool,
    character_allowance: Option<u64>,
    character_usage: u64,
    rate_limit_policy: RateLimitPolicy,
    rate_limits: Vec<(Endpoint, RateLimit)>,
}

impl TtsMonsterClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            enforce_char_quota: true,
            character_allowance: None,
            character_usage: 0,
            rate_limit_policy: RateLimitPolicy::default(),
            rate_limits: Vec::new(),
        }
    }

    /// Seed the builder from environment variables:
    /// - `TTSMONSTER_BASE_URL`
    /// - `TTSMONSTER_TIMEOUT_SECS`
    /// - `TTSMONSTER_ENFORCE_QUOTA` (`0`, `false`, `no`, `off` disable)
    ///
    /// The API key is always resolved at build time, `TTSMONSTER_API_KEY`
    /// being the last fallback.
    pub fn from_env() -> Self {
        let mut builder = Self::new();
        if let Ok(url) = env::var(BASE_URL_ENV) {
            builder.base_url = Some(url);
        }
        if let Some(secs) = env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
        {
            builder.timeout = Duration::from_secs(secs.max(1));
        }
        if let Ok(flag) = env::var(ENFORCE_QUOTA_ENV) {
            builder.enforce_char_quota = parse_flag(&flag);
        }
        builder
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API base URL (e.g. to point at a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn enforce_char_quota(mut self, enforce: bool) -> Self {
        self.enforce_char_quota = enforce;
        self
    }

    /// Use a locally known allowance instead of fetching it from the account.
    pub fn character_allowance(mut self, allowance: u64) -> Self {
        self.character_allowance = Some(allowance);
        self
    }

    /// Characters already used this period, paired with `character_allowance`.
    pub fn character_usage(mut self, usage: u64) -> Self {
        self.character_usage = usage;
        self
    }

    pub fn rate_limit_policy(mut self, policy: RateLimitPolicy) -> Self {
        self.rate_limit_policy = policy;
        self
    }

    /// Replace the default call-rate limit of one endpoint.
    pub fn rate_limit(mut self, endpoint: Endpoint, limit: RateLimit) -> Self {
        self.rate_limits.push((endpoint, limit));
        self
    }

    pub async fn build(self) -> Result<TtsMonsterClient> {
        if self.timeout.is_zero() {
            return Err(Error::configuration_with_context(
                "timeout must be greater than zero",
                ErrorContext::new()
                    .with_field_path("timeout")
                    .with_source("builder"),
            ));
        }
        let api_key = resolve_api_key(self.api_key)?;
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let transport = HttpTransport::new(&base_url, api_key, self.timeout, &user_agent())?;

        let mut rate_limiter = RateLimiter::new(self.rate_limit_policy);
        for (endpoint, limit) in self.rate_limits {
            rate_limiter = rate_limiter.with_limit(endpoint, limit);
        }

        let mut quota = QuotaTracker::new(self.enforce_char_quota).with_usage(self.character_usage);
        if let Some(allowance) = self.character_allowance {
            quota = quota.with_allowance(allowance);
        }

        let mut client = TtsMonsterClient {
            transport,
            rate_limiter,
            quota,
        };

        if self.enforce_char_quota && self.character_allowance.is_none() {
            debug!("fetching character quota from account");
            match client.refresh_quota().await {
                Ok(_) => {}
                Err(Error::Remote { status: 401, .. }) => return Err(Error::InvalidApiKey),
                Err(e) => return Err(e),
            }
        }

        Ok(client)
    }
}

impl Default for TtsMonsterClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Explicit key, then the OS keyring, then `TTSMONSTER_API_KEY`.
fn resolve_api_key(explicit: Option<String>) -> Result<String> {
    let key = explicit
        .or_else(keyring_api_key)
        .or_else(|| env::var(API_KEY_ENV).ok())
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());

    key.ok_or_else(|| {
        Error::configuration_with_context(
            "API key required",
            ErrorContext::new()
                .with_field_path("api_key")
                .with_details(format!(
                    "set it on the builder, in the '{}' keyring entry, or in {}",
                    KEYRING_SERVICE, API_KEY_ENV
                ))
                .with_source("builder"),
        )
    })
}

fn keyring_api_key() -> Option<String> {
    Entry::new(KEYRING_SERVICE, KEYRING_USER)
        .ok()
        .and_then(|entry| entry.get_password().ok())
}

fn user_agent() -> String {
    format!("tts-monster-rs/{}", env!("CARGO_PKG_VERSION"))
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

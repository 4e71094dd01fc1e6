use bytes::Bytes;
use tracing::{debug, instrument};
use url::Url;

use super::builder::TtsMonsterClientBuilder;
use super::endpoint::Endpoint;
use crate::resilience::{QuotaTracker, RateLimiter};
use crate::transport::HttpTransport;
use crate::types::generate::MAX_MESSAGE_CHARS;
use crate::types::{GenerateRequest, GenerateResponse, UserInfo, VoicesResponse};
use crate::{Error, ErrorContext, Result};

/// TTS.Monster API client.
///
/// Each call passes the local guards (message length, character quota,
/// per-endpoint rate limit) before a single request is sent. Methods take
/// `&mut self` because they update the rate-limit and quota state.
#[derive(Debug)]
pub struct TtsMonsterClient {
    pub(crate) transport: HttpTransport,
    pub(crate) rate_limiter: RateLimiter,
    pub(crate) quota: QuotaTracker,
}

impl TtsMonsterClient {
    pub fn builder() -> TtsMonsterClientBuilder {
        TtsMonsterClientBuilder::new()
    }

    /// Synthesize `message` with the given voice, requesting usage figures.
    ///
    /// `voice` is a voice ID or a [`PublicVoice`](crate::voices::PublicVoice).
    pub async fn generate(
        &mut self,
        voice: impl AsRef<str>,
        message: &str,
    ) -> Result<GenerateResponse> {
        self.generate_with(GenerateRequest::new(voice, message)).await
    }

    #[instrument(skip(self, request), fields(voice_id = %request.voice_id))]
    pub async fn generate_with(&mut self, request: GenerateRequest) -> Result<GenerateResponse> {
        let chars = request.char_count();
        self.quota.check(chars as u64)?;
        if chars > MAX_MESSAGE_CHARS {
            return Err(Error::MessageTooLong {
                length: chars,
                limit: MAX_MESSAGE_CHARS,
            });
        }
        if request.voice_id.trim().is_empty() {
            return Err(Error::validation_with_context(
                "voice ID must not be empty",
                ErrorContext::new()
                    .with_field_path("voice_id")
                    .with_source("generate"),
            ));
        }
        self.rate_limiter.acquire(Endpoint::Generate).await?;

        let body = serde_json::to_value(&request)?;
        let response: GenerateResponse = self
            .transport
            .post(Endpoint::Generate, Some(&body))
            .await?;

        // Only the admitted count is recorded; the server's own figure stays on
        // the response and is reconciled by `refresh_quota`.
        self.quota.record(chars as u64);
        debug!(
            chars,
            reported = ?response.character_usage,
            usage = self.quota.usage(),
            "generate succeeded"
        );
        Ok(response)
    }

    /// Account plan and character quota. Does not touch the local counters.
    #[instrument(skip(self))]
    pub async fn get_user(&mut self) -> Result<UserInfo> {
        self.rate_limiter.acquire(Endpoint::User).await?;
        self.transport.post(Endpoint::User, None).await
    }

    /// Public and custom voices available to the account.
    #[instrument(skip(self))]
    pub async fn get_voices(&mut self) -> Result<VoicesResponse> {
        self.rate_limiter.acquire(Endpoint::Voices).await?;
        self.transport.post(Endpoint::Voices, None).await
    }

    /// Re-fetch account info and replace the local quota figures with it.
    pub async fn refresh_quota(&mut self) -> Result<UserInfo> {
        let user = self.get_user().await?;
        self.quota.sync(&user);
        Ok(user)
    }

    /// Download the audio produced by a `generate` call as opaque bytes.
    pub async fn download_audio(&self, generated: &GenerateResponse) -> Result<Bytes> {
        self.transport.get_bytes(&generated.url).await
    }

    pub fn quota(&self) -> &QuotaTracker {
        &self.quota
    }

    /// Toggle local character quota enforcement.
    ///
    /// Enabling it on a client that never learned its allowance makes
    /// `generate` fail until [`refresh_quota`](Self::refresh_quota) is called.
    pub fn set_enforce_char_quota(&mut self, enforce: bool) {
        self.quota.set_enforced(enforce);
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }
}

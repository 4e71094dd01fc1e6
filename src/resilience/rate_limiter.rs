use crate::client::Endpoint;
use crate::{Error, ErrorContext, Result};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// A call-rate limit: `count` calls per `period`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    count: u32,
    period: Duration,
}

impl RateLimit {
    /// Validated constructor. `count` must be at least 1, `period` non-zero,
    /// and `period / count` at least one nanosecond.
    pub fn new(count: u32, period: Duration) -> Result<Self> {
        if count == 0 {
            return Err(Error::configuration_with_context(
                "rate limit count must be at least 1",
                ErrorContext::new()
                    .with_field_path("rate_limit.count")
                    .with_source("rate_limiter"),
            ));
        }
        if period.is_zero() {
            return Err(Error::configuration_with_context(
                "rate limit period must be greater than zero",
                ErrorContext::new()
                    .with_field_path("rate_limit.period")
                    .with_source("rate_limiter"),
            ));
        }
        if (period / count).is_zero() {
            return Err(Error::configuration_with_context(
                "rate limit count is too large for its period",
                ErrorContext::new()
                    .with_field_path("rate_limit.count")
                    .with_details(format!("{} calls per {:?}", count, period))
                    .with_source("rate_limiter"),
            ));
        }
        Ok(Self { count, period })
    }

    pub(crate) fn per_period(count: u32, period: Duration) -> Self {
        debug_assert!(count > 0 && !period.is_zero());
        Self { count, period }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Spacing between calls at the sustained rate (`period / count`).
    pub fn emission_interval(&self) -> Duration {
        self.period / self.count
    }
}

/// What to do when a call is not admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RateLimitPolicy {
    /// Sleep until the call is admitted, then proceed.
    #[default]
    Wait,
    /// Fail immediately with [`Error::RateLimited`].
    Reject,
}

/// Outcome of a single admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Allowed,
    Denied { retry_after: Duration },
}

/// Per-endpoint GCRA (generic cell rate algorithm) limiter.
///
/// Each endpoint keeps a theoretical arrival time (TAT). A call at `now` is
/// admitted while `TAT - now <= period - emission_interval`, which allows a
/// burst of `count` calls followed by one call per emission interval.
/// Best-effort only: the server enforces the real limits.
#[derive(Debug)]
pub struct RateLimiter {
    limits: HashMap<Endpoint, RateLimit>,
    tat: HashMap<Endpoint, Instant>,
    policy: RateLimitPolicy,
}

impl RateLimiter {
    /// Limiter with the published default limits for every endpoint.
    pub fn new(policy: RateLimitPolicy) -> Self {
        let limits = Endpoint::ALL
            .iter()
            .map(|e| (*e, e.default_rate_limit()))
            .collect();
        Self {
            limits,
            tat: HashMap::new(),
            policy,
        }
    }

    pub fn with_limit(mut self, endpoint: Endpoint, limit: RateLimit) -> Self {
        self.limits.insert(endpoint, limit);
        self
    }

    pub fn limit(&self, endpoint: Endpoint) -> RateLimit {
        self.limits
            .get(&endpoint)
            .copied()
            .unwrap_or_else(|| endpoint.default_rate_limit())
    }

    pub fn policy(&self) -> RateLimitPolicy {
        self.policy
    }

    /// Check and, when admitted, record a call made at `now`.
    pub fn check_at(&mut self, endpoint: Endpoint, now: Instant) -> Admission {
        let limit = self.limit(endpoint);
        let emission = limit.emission_interval();
        let tat = self
            .tat
            .get(&endpoint)
            .copied()
            .map_or(now, |t| t.max(now));
        let separation = tat.duration_since(now);
        let max_interval = limit.period.saturating_sub(emission);

        if separation > max_interval {
            Admission::Denied {
                retry_after: separation - max_interval,
            }
        } else {
            self.tat.insert(endpoint, tat + emission);
            Admission::Allowed
        }
    }

    /// Admit one call to `endpoint`, sleeping or failing per the policy.
    pub async fn acquire(&mut self, endpoint: Endpoint) -> Result<()> {
        loop {
            match self.check_at(endpoint, Instant::now()) {
                Admission::Allowed => return Ok(()),
                Admission::Denied { retry_after } => match self.policy {
                    RateLimitPolicy::Reject => {
                        warn!(%endpoint, ?retry_after, "rate limit reached, rejecting call");
                        return Err(Error::RateLimited {
                            endpoint,
                            retry_after,
                        });
                    }
                    RateLimitPolicy::Wait => {
                        warn!(%endpoint, ?retry_after, "rate limit reached, delaying call");
                        tokio::time::sleep(retry_after).await;
                    }
                },
            }
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitPolicy::default())
    }
}

//! Local guards that keep the client inside the service's limits.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`rate_limiter`] | Per-endpoint GCRA call-rate limiter |
//! | [`quota`] | Character quota tracking and enforcement |
//!
//! Both are best-effort. TTS.Monster enforces the real limits server-side;
//! these guards only avoid sending requests that are certain to be throttled
//! or billed as overage.
//!
//! ```rust
//! use tts_monster::resilience::quota::QuotaTracker;
//!
//! let mut quota = QuotaTracker::new(true).with_allowance(1000);
//! assert!(quota.check(500).is_ok());
//! quota.record(500);
//! assert!(quota.check(600).is_err());
//! assert_eq!(quota.usage(), 500);
//! ```

pub mod quota;
pub mod rate_limiter;

pub use quota::QuotaTracker;
pub use rate_limiter::{Admission, RateLimit, RateLimitPolicy, RateLimiter};

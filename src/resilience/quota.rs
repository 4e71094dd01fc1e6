//! Character quota tracking.

use crate::types::UserInfo;
use crate::{Error, Result};
use tracing::{info, warn};

/// Characters used against the account allowance for the current billing period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaTracker {
    usage: u64,
    allowance: Option<u64>,
    enforce: bool,
}

impl QuotaTracker {
    pub fn new(enforce: bool) -> Self {
        Self {
            usage: 0,
            allowance: None,
            enforce,
        }
    }

    pub fn with_allowance(mut self, allowance: u64) -> Self {
        self.allowance = Some(allowance);
        self
    }

    pub fn with_usage(mut self, usage: u64) -> Self {
        self.usage = usage;
        self
    }

    pub fn usage(&self) -> u64 {
        self.usage
    }

    pub fn allowance(&self) -> Option<u64> {
        self.allowance
    }

    /// Characters left, if the allowance is known.
    pub fn remaining(&self) -> Option<u64> {
        self.allowance.map(|a| a.saturating_sub(self.usage))
    }

    pub fn is_enforced(&self) -> bool {
        self.enforce
    }

    pub fn set_enforced(&mut self, enforce: bool) {
        self.enforce = enforce;
    }

    /// Fail with [`Error::QuotaExceeded`] if `requested` more characters would
    /// take usage past the allowance. Always passes when not enforced.
    pub fn check(&self, requested: u64) -> Result<()> {
        if !self.enforce {
            return Ok(());
        }
        let allowance = self.allowance.ok_or_else(|| {
            Error::configuration("character quota is enforced but the allowance is unknown")
        })?;
        if self.usage.saturating_add(requested) > allowance {
            warn!(
                requested,
                usage = self.usage,
                allowance,
                "request would exceed character quota"
            );
            return Err(Error::QuotaExceeded {
                requested,
                usage: self.usage,
                allowance,
            });
        }
        Ok(())
    }

    /// Add characters consumed by a successful request.
    pub fn record(&mut self, characters: u64) {
        self.usage = self.usage.saturating_add(characters);
    }

    /// Replace usage and allowance with the account's current figures.
    pub fn sync(&mut self, user: &UserInfo) {
        info!(
            usage = user.character_usage,
            allowance = user.character_allowance,
            "character quota synced from account"
        );
        self.usage = user.character_usage;
        self.allowance = Some(user.character_allowance);
    }
}

//! Account information returned by the `user` endpoint.

use serde::{Deserialize, Serialize};

/// The caller's subscription and character quota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub current_plan: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Unix timestamp (seconds) when the billing period renews.
    #[serde(default)]
    pub renewal_time: Option<i64>,
    pub character_usage: u64,
    pub character_allowance: u64,
    #[serde(default)]
    pub portal_url: Option<String>,
    #[serde(default)]
    pub has_payment_method: Option<bool>,
    #[serde(default)]
    pub downgrading_to_plan: Option<String>,
}

impl UserInfo {
    pub fn remaining_characters(&self) -> u64 {
        self.character_allowance.saturating_sub(self.character_usage)
    }
}

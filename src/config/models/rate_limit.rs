//! Rate limiting configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Budgets for AI refinement requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Requests allowed per minute window
    #[serde(default = "default_max_per_minute")]
    pub max_per_minute: u32,
    /// Requests allowed per day window
    #[serde(default = "default_max_per_day")]
    pub max_per_day: u32,
    /// Minute window length in seconds
    #[serde(default = "default_minute_window_secs")]
    pub minute_window_secs: u64,
    /// Day window length in seconds
    #[serde(default = "default_day_window_secs")]
    pub day_window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_per_minute: default_max_per_minute(),
            max_per_day: default_max_per_day(),
            minute_window_secs: default_minute_window_secs(),
            day_window_secs: default_day_window_secs(),
        }
    }
}

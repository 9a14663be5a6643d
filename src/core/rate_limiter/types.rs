//! Rate limiter types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;
use thiserror::Error;

/// Budget window a request is counted against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateWindow {
    /// Rolling one-minute window
    Minute,
    /// Rolling 24-hour window
    Day,
}

impl fmt::Display for RateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateWindow::Minute => write!(f, "minute"),
            RateWindow::Day => write!(f, "day"),
        }
    }
}

/// Admission refused because a window's budget is spent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", describe(.window, .limit))]
pub struct RateLimitExceeded {
    /// Window whose budget ran out
    pub window: RateWindow,
    /// Budget of that window
    pub limit: u32,
}

fn describe(window: &RateWindow, limit: &u32) -> String {
    match window {
        RateWindow::Minute => format!(
            "Rate limit exceeded: Maximum {} requests per minute. Please wait.",
            limit
        ),
        RateWindow::Day => format!("Daily limit exceeded: Maximum {} requests per day.", limit),
    }
}

/// Counter values right after a successful admission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageCounts {
    pub minute: u32,
    pub day: u32,
}

/// Read-only view of the counters formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSnapshot {
    /// `"<count>/<max>"` for the minute window
    pub minute_usage: String,
    /// `"<count>/<max>"` for the day window
    pub daily_usage: String,
    pub minute_remaining: u32,
    pub daily_remaining: u32,
}

/// One window's counter and the instant it began
#[derive(Debug, Clone, Copy)]
pub(super) struct WindowState {
    pub(super) count: u32,
    pub(super) started: Instant,
}

impl WindowState {
    pub(super) fn starting_at(now: Instant) -> Self {
        Self {
            count: 0,
            started: now,
        }
    }
}

/// Process-lifetime counters for both windows
#[derive(Debug, Clone, Copy)]
pub(super) struct RateLimitState {
    pub(super) minute: WindowState,
    pub(super) day: WindowState,
}

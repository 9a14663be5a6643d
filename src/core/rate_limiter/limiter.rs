//! Core rate limiter implementation

use super::clock::{Clock, SystemClock};
use super::types::{
    RateLimitExceeded, RateLimitState, RateWindow, UsageCounts, UsageSnapshot, WindowState,
};
use crate::config::models::rate_limit::RateLimitConfig;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Minute and day request budgets sharing one check-and-increment step
#[derive(Debug)]
pub struct DualWindowLimiter {
    config: RateLimitConfig,
    state: Mutex<RateLimitState>,
    clock: Arc<dyn Clock>,
}

impl DualWindowLimiter {
    /// Create a limiter on the system clock
    pub fn new(config: RateLimitConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a limiter reading time from `clock`
    pub fn with_clock(config: RateLimitConfig, clock: Arc<dyn Clock>) -> Self {
        let now = clock.now();
        Self {
            config,
            state: Mutex::new(RateLimitState {
                minute: WindowState::starting_at(now),
                day: WindowState::starting_at(now),
            }),
            clock,
        }
    }

    /// Atomically roll expired windows, check both budgets and count the request
    ///
    /// The whole step runs under one lock and never awaits, so two callers
    /// racing for the last slot cannot both be admitted.
    pub fn try_acquire(&self) -> Result<UsageCounts, RateLimitExceeded> {
        let now = self.clock.now();
        let mut state = self.state.lock();

        roll_if_expired(&mut state.minute, now, self.minute_window(), RateWindow::Minute);
        roll_if_expired(&mut state.day, now, self.day_window(), RateWindow::Day);

        if state.minute.count >= self.config.max_per_minute {
            debug!(
                "AI request rejected: minute budget spent ({}/{})",
                state.minute.count, self.config.max_per_minute
            );
            return Err(RateLimitExceeded {
                window: RateWindow::Minute,
                limit: self.config.max_per_minute,
            });
        }

        if state.day.count >= self.config.max_per_day {
            debug!(
                "AI request rejected: daily budget spent ({}/{})",
                state.day.count, self.config.max_per_day
            );
            return Err(RateLimitExceeded {
                window: RateWindow::Day,
                limit: self.config.max_per_day,
            });
        }

        state.minute.count += 1;
        state.day.count += 1;

        info!(
            minute = state.minute.count,
            day = state.day.count,
            "AI usage - this minute: {}/{}, today: {}/{}",
            state.minute.count,
            self.config.max_per_minute,
            state.day.count,
            self.config.max_per_day
        );

        Ok(UsageCounts {
            minute: state.minute.count,
            day: state.day.count,
        })
    }

    /// Current counters without rolling any window
    pub fn counts(&self) -> UsageCounts {
        let state = self.state.lock();
        UsageCounts {
            minute: state.minute.count,
            day: state.day.count,
        }
    }

    /// Display snapshot of both counters
    pub fn usage(&self) -> UsageSnapshot {
        let counts = self.counts();
        UsageSnapshot {
            minute_usage: format!("{}/{}", counts.minute, self.config.max_per_minute),
            daily_usage: format!("{}/{}", counts.day, self.config.max_per_day),
            minute_remaining: self.config.max_per_minute.saturating_sub(counts.minute),
            daily_remaining: self.config.max_per_day.saturating_sub(counts.day),
        }
    }

    /// Get the configured budgets
    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    fn minute_window(&self) -> Duration {
        Duration::from_secs(self.config.minute_window_secs)
    }

    fn day_window(&self) -> Duration {
        Duration::from_secs(self.config.day_window_secs)
    }
}

fn roll_if_expired(window: &mut WindowState, now: Instant, length: Duration, which: RateWindow) {
    if now.duration_since(window.started) > length {
        if window.count > 0 {
            debug!("Resetting {} window after {:?}", which, length);
        }
        *window = WindowState::starting_at(now);
    }
}

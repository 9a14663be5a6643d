//! Dual-window admission limiter for AI requests
//!
//! Enforces a per-minute and a per-day request budget. Windows are rolled
//! lazily: a window is reset the first time a check happens after it has
//! expired, never on a timer.

mod clock;
mod limiter;
mod types;


pub use clock::{Clock, ManualClock, SystemClock};
pub use limiter::DualWindowLimiter;
pub use types::{RateLimitExceeded, RateWindow, UsageCounts, UsageSnapshot};

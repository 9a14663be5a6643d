//! Test fixtures

use chrono::NaiveDate;
use std::sync::Arc;
use voice_todo_rs::config::{Config, RateLimitConfig};
use voice_todo_rs::core::providers::TextGenerator;
use voice_todo_rs::server::AppState;

pub const TEST_USER: &str = "tester";
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// 2024-03-05, a Tuesday
pub fn tuesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
}

/// Defaults with known credentials and the given per-minute budget
pub fn test_config(max_per_minute: u32) -> Config {
    let mut config = Config::default();
    config.app.auth.user_id = TEST_USER.to_string();
    config.app.auth.password = TEST_PASSWORD.to_string();
    config.app.rate_limit = RateLimitConfig {
        max_per_minute,
        max_per_day: 100,
        ..RateLimitConfig::default()
    };
    config
}

/// App state around a stub generator
pub fn test_state(max_per_minute: u32, generator: Arc<dyn TextGenerator>) -> AppState {
    AppState::with_generator(test_config(max_per_minute), generator)
        .expect("test state should build")
}

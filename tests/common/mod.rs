//! Common test utilities for voice-todo-rs
//!
//! - Configuration and state fixtures
//! - Stub text generators
//! - Assertions on API error bodies

pub mod assertions;
pub mod fixtures;
pub mod providers;

// Re-export commonly used items
pub use fixtures::{test_config, test_state, tuesday};
pub use providers::StubGenerator;

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}

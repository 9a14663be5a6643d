//! # voice-todo-rs
//!
//! Backend for a voice-driven to-do list.
//!
//! ## Features
//!
//! - **Temporal extraction**: turns phrases like "call mom tomorrow at 3pm"
//!   into a concrete date and 24-hour time
//! - **AI refinement**: rewrites rough voice transcripts into concise tasks
//!   through Gemini, falling back to the original text on any failure
//! - **Dual-window budget**: every remote call is counted against a
//!   per-minute and a per-day limit
//! - **Task API**: single-user task storage with share and calendar links
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use voice_todo_rs::extract_on;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
//! let found = extract_on("dentist tomorrow at 3pm", today);
//! assert_eq!(found.due_date().as_deref(), Some("2024-03-06T15:00"));
//! ```
//!
//! ## Server Mode
//!
//! ```rust,no_run
//! use voice_todo_rs::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/voice-todo.yaml").await?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

pub use core::providers::{ProviderError, TextGenerator};
pub use core::rate_limiter::{DualWindowLimiter, RateLimitExceeded, UsageSnapshot};
pub use core::{
    Refinement, RefinementGateway, TaskComposer, TaskDraft, TemporalMatch, TranscriptAssembler,
    TranscriptSegment, extract, extract_on,
};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Service build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (unix seconds)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build metadata baked in by the build script
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}

//! Application state shared across HTTP handlers

use crate::auth::StaticCredentials;
use crate::config::Config;
use crate::core::pipeline::TaskComposer;
use crate::core::providers::TextGenerator;
use crate::core::providers::gemini::GeminiClient;
use crate::core::rate_limiter::DualWindowLimiter;
use crate::core::refine::RefinementGateway;
use crate::core::tasks::{MemoryStore, TaskStore, UsageStore};
use crate::utils::error::Result;
use crate::utils::logging::mask_secret;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Shared resources behind every handler.
///
/// Everything is behind `Arc`, so cloning per worker is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (read-only)
    pub config: Arc<Config>,
    /// The single login
    pub credentials: Arc<StaticCredentials>,
    /// Task persistence
    pub tasks: Arc<dyn TaskStore>,
    /// Per-user daily AI usage persistence
    pub usage: Arc<dyn UsageStore>,
    /// Rate-limited access to the text generator
    pub gateway: Arc<RefinementGateway>,
    /// Extraction + refinement pipeline
    pub composer: TaskComposer,
}

impl AppState {
    /// Wire state from configuration with the Gemini backend
    pub fn from_config(config: Config) -> Result<Self> {
        match config.ai().api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => {
                info!(
                    "Gemini model {} (key {})",
                    config.ai().model,
                    mask_secret(key)
                );
            }
            _ => warn!("No Gemini API key configured; refinement will return text unchanged"),
        }

        let client = GeminiClient::new(config.ai().clone())?;
        Self::with_generator(config, Arc::new(client))
    }

    /// Wire state around any text generator, backed by the in-memory store
    pub fn with_generator(config: Config, generator: Arc<dyn TextGenerator>) -> Result<Self> {
        let store = Arc::new(MemoryStore::new());
        Self::with_stores(config, generator, store.clone(), store)
    }

    pub fn with_stores(
        config: Config,
        generator: Arc<dyn TextGenerator>,
        tasks: Arc<dyn TaskStore>,
        usage: Arc<dyn UsageStore>,
    ) -> Result<Self> {
        let credentials = StaticCredentials::from_config(config.auth())?;
        let limiter = Arc::new(DualWindowLimiter::new(config.rate_limit().clone()));
        let gateway = Arc::new(
            RefinementGateway::new(limiter, generator)
                .with_timeout(Duration::from_secs(config.ai().request_timeout)),
        );
        let composer = TaskComposer::new(gateway.clone());

        Ok(Self {
            config: Arc::new(config),
            credentials: Arc::new(credentials),
            tasks,
            usage,
            gateway,
            composer,
        })
    }
}

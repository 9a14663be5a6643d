//! Server builder and run_server function

use crate::config::Config;
use crate::core::providers::TextGenerator;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    generator: Option<Arc<dyn TextGenerator>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a text generator other than the configured Gemini client
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        match self.generator {
            Some(generator) => Ok(HttpServer::with_state(AppState::with_generator(
                config, generator,
            )?)),
            None => HttpServer::new(&config),
        }
    }
}

/// Run the server until it is stopped
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting voice to-do service v{}", crate::VERSION);

    let server = ServerBuilder::new().with_config(config).build()?;
    let server_config = server.config();
    info!(
        "Server starting at: http://{}:{}",
        server_config.host, server_config.port
    );
    info!("API endpoints:");
    info!("   GET    /api/health");
    info!("   POST   /api/auth/login");
    info!("   GET    /api/todos/{{userId}}  POST /api/todos  PATCH|DELETE /api/todos/{{id}}/...");
    info!("   POST   /api/ai-usage  GET /api/ai-usage/{{userId}}");
    info!("   POST   /api/ai/refine  GET /api/ai/usage");
    info!("   POST   /api/extract  /api/compose  /api/transcript");

    server.start().await
}

//! Health check endpoint

use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthStatus {
    status: &'static str,
    message: &'static str,
    version: &'static str,
    git_hash: &'static str,
    ai_configured: bool,
}

/// Liveness plus build information
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let build = crate::build_info();
    Ok(HttpResponse::Ok().json(HealthStatus {
        status: "ok",
        message: "Server is running",
        version: build.version,
        git_hash: build.git_hash,
        ai_configured: state.config.ai().has_api_key(),
    }))
}

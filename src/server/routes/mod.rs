//! HTTP route modules
//!
//! Every endpoint lives under `/api`. Request and response bodies use
//! camelCase field names.

pub mod ai;
pub mod ai_usage;
pub mod auth;
pub mod health;
pub mod todos;
pub mod voice;

use crate::utils::error::{GatewayError, Result};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body returned by mutation endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// `200 {"success": true}`
pub fn success() -> HttpResponse {
    HttpResponse::Ok().json(SuccessResponse { success: true })
}

/// Parse a task id taken from the path
pub(crate) fn parse_task_id(raw: &str) -> Result<Uuid> {
    Ok(Uuid::parse_str(raw)?)
}

/// Reject blank required text fields
pub(crate) fn require_text<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed)
}

/// Register every route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health::configure_routes)
            .configure(auth::configure_routes)
            .configure(todos::configure_routes)
            .configure(ai_usage::configure_routes)
            .configure(ai::configure_routes)
            .configure(voice::configure_routes),
    );
}

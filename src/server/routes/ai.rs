//! AI refinement endpoints

use crate::core::rate_limiter::UsageSnapshot;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, Result as ActixResult, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::require_text;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/ai")
            .route("/refine", web::post().to(refine))
            .route("/usage", web::get().to(usage)),
    );
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineRequest {
    pub text: String,
    #[serde(default)]
    pub context: Option<String>,
    /// When present, the call is also counted in the user's daily record
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineResponse {
    pub text: String,
    pub refined: bool,
    pub usage: UsageSnapshot,
}

async fn refine(
    state: web::Data<AppState>,
    request: web::Json<RefineRequest>,
) -> ActixResult<HttpResponse> {
    let text = require_text(&request.text, "text")?;

    let refinement = state
        .gateway
        .refine_detailed(text, request.context.as_deref())
        .await
        .map_err(GatewayError::from)?;

    if let Some(user_id) = request.user_id.as_deref() {
        record_daily_usage(&state, user_id).await;
    }

    Ok(HttpResponse::Ok().json(RefineResponse {
        text: refinement.text,
        refined: refinement.refined,
        usage: state.gateway.usage(),
    }))
}

async fn usage(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.gateway.usage()))
}

/// Bump the persisted daily counter; a storage failure must not fail the
/// request that already spent budget
pub(crate) async fn record_daily_usage(state: &AppState, user_id: &str) {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return;
    }
    if let Err(e) = state
        .usage
        .increment(user_id, Utc::now().date_naive())
        .await
    {
        warn!("Failed to record AI usage for {}: {}", user_id, e);
    }
}

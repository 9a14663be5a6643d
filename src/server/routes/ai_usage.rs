//! Per-user daily AI usage counters

use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{require_text, success};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/ai-usage", web::post().to(record_usage))
        .route("/ai-usage/{user_id}", web::get().to(daily_usage));
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRequest {
    pub user_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyUsageResponse {
    pub daily_usage: u64,
}

/// Count one AI call against today's (UTC) record
async fn record_usage(
    state: web::Data<AppState>,
    request: web::Json<UsageRequest>,
) -> ActixResult<HttpResponse> {
    let user_id = require_text(&request.user_id, "userId")?;
    state
        .usage
        .increment(user_id, Utc::now().date_naive())
        .await?;
    Ok(success())
}

async fn daily_usage(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let count = state
        .usage
        .daily_count(&user_id, Utc::now().date_naive())
        .await?;
    Ok(HttpResponse::Ok().json(DailyUsageResponse { daily_usage: count }))
}

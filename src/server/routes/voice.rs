//! Endpoints for captured speech: transcript assembly, extraction and
//! task composition

use crate::core::pipeline::TaskDraft;
use crate::core::temporal::{self, TemporalMatch};
use crate::core::transcript::{TranscriptAssembler, TranscriptSegment};
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, Result as ActixResult, web};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ai::record_daily_usage;
use super::require_text;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/extract", web::post().to(extract))
        .route("/compose", web::post().to(compose))
        .route("/transcript", web::post().to(assemble_transcript));
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
    /// Caller's calendar date; defaults to the server's local date
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    #[serde(flatten)]
    pub temporal: TemporalMatch,
    pub due_date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeRequest {
    pub text: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub refine: bool,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptRequest {
    pub segments: Vec<TranscriptSegment>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub text: Option<String>,
}

async fn extract(request: web::Json<ExtractRequest>) -> ActixResult<HttpResponse> {
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    let temporal = temporal::extract_on(&request.text, today);
    Ok(HttpResponse::Ok().json(ExtractResponse {
        due_date: temporal.due_date(),
        temporal,
    }))
}

async fn compose(
    state: web::Data<AppState>,
    request: web::Json<ComposeRequest>,
) -> ActixResult<HttpResponse> {
    let text = require_text(&request.text, "text")?;
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());

    let draft: TaskDraft = state
        .composer
        .compose_on(text, request.context.as_deref(), request.refine, today)
        .await
        .map_err(GatewayError::from)?;

    if request.refine {
        if let Some(user_id) = request.user_id.as_deref() {
            record_daily_usage(&state, user_id).await;
        }
    }

    Ok(HttpResponse::Ok().json(draft))
}

async fn assemble_transcript(request: web::Json<TranscriptRequest>) -> ActixResult<HttpResponse> {
    let mut assembler = TranscriptAssembler::new();
    for segment in request.into_inner().segments {
        assembler.push(segment);
    }
    Ok(HttpResponse::Ok().json(TranscriptResponse {
        text: assembler.finish(),
    }))
}

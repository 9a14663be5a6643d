//! Login endpoint

use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/login", web::post().to(login));
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_id: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    // Hashing is CPU-bound; keep it off the async worker
    let credentials = state.credentials.clone();
    let LoginRequest { user_id, password } = request.into_inner();
    let attempted = user_id.clone();
    let valid = web::block(move || credentials.verify(&user_id, &password)).await?;

    if valid {
        info!("User {} logged in", attempted);
        Ok(HttpResponse::Ok().json(LoginResponse {
            success: true,
            user_id: Some(state.credentials.user_id()),
            message: None,
        }))
    } else {
        warn!("Failed login attempt");
        Ok(HttpResponse::Unauthorized().json(LoginResponse {
            success: false,
            user_id: None,
            message: Some("Invalid credentials"),
        }))
    }
}

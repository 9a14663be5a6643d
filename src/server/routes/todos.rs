//! Task CRUD endpoints

use super::{parse_task_id, require_text, success};
use crate::core::tasks::{
    NewTask, TaskStats, calendar_link, filter_tasks, has_similar_task, share_link,
};
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/todos")
            .route("", web::post().to(create_todo))
            .route("/{user_id}", web::get().to(list_todos))
            .route("/{id}", web::delete().to(delete_todo))
            .route("/{user_id}/stats", web::get().to(todo_stats))
            .route("/{user_id}/similar", web::get().to(similar_todo))
            .route("/{id}/status", web::patch().to(set_status))
            .route("/{id}/text", web::patch().to(set_text))
            .route("/{id}/duedate", web::patch().to(set_due_date))
            .route("/{id}/share", web::patch().to(share_todo))
            .route("/{id}/links", web::get().to(todo_links)),
    );
}

/// Optional list filters
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub completed: Option<bool>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DueDateRequest {
    #[serde(default)]
    pub due_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SimilarQuery {
    pub text: String,
}

#[derive(Debug, Serialize)]
struct SimilarResponse {
    similar: bool,
}

#[derive(Debug, Serialize)]
struct LinksResponse {
    calendar: String,
    share: String,
}

async fn list_todos(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    query: web::Query<ListQuery>,
) -> ActixResult<HttpResponse> {
    let tasks = state.tasks.list_for_user(&user_id).await?;
    let ListQuery { completed, date } = query.into_inner();

    let body = match completed {
        Some(completed) => filter_tasks(&tasks, completed, date)
            .into_iter()
            .cloned()
            .collect(),
        None if date.is_some() => tasks
            .into_iter()
            .filter(|task| task.due_day() == date)
            .collect(),
        None => tasks,
    };
    Ok(HttpResponse::Ok().json(body))
}

async fn create_todo(
    state: web::Data<AppState>,
    request: web::Json<NewTask>,
) -> ActixResult<HttpResponse> {
    let task = state.tasks.create(request.into_inner()).await?;
    info!("Created task {}", task.id);
    Ok(HttpResponse::Ok().json(task))
}

async fn set_status(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<StatusRequest>,
) -> ActixResult<HttpResponse> {
    let id = parse_task_id(&id)?;
    state.tasks.set_completed(id, request.completed).await?;
    Ok(success())
}

async fn set_text(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<TextRequest>,
) -> ActixResult<HttpResponse> {
    let id = parse_task_id(&id)?;
    let text = require_text(&request.text, "text")?;
    state.tasks.set_text(id, text).await?;
    Ok(success())
}

async fn set_due_date(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<DueDateRequest>,
) -> ActixResult<HttpResponse> {
    let id = parse_task_id(&id)?;
    state
        .tasks
        .set_due_date(id, request.into_inner().due_date)
        .await?;
    Ok(success())
}

async fn share_todo(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = parse_task_id(&id)?;
    state.tasks.mark_shared(id).await?;
    Ok(success())
}

async fn delete_todo(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = parse_task_id(&id)?;
    state.tasks.delete(id).await?;
    info!("Deleted task {}", id);
    Ok(success())
}

async fn todo_stats(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let tasks = state.tasks.list_for_user(&user_id).await?;
    let stats = TaskStats::from_tasks(&tasks, Local::now().naive_local());
    Ok(HttpResponse::Ok().json(stats))
}

async fn similar_todo(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
    query: web::Query<SimilarQuery>,
) -> ActixResult<HttpResponse> {
    let tasks = state.tasks.list_for_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(SimilarResponse {
        similar: has_similar_task(&tasks, &query.text),
    }))
}

async fn todo_links(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = parse_task_id(&id)?;
    let task = state.tasks.get(id).await?;
    Ok(HttpResponse::Ok().json(LinksResponse {
        calendar: calendar_link(&task, Local::now().naive_local())?,
        share: share_link(&task)?,
    }))
}

//! Persistence seams for tasks and daily AI usage

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use super::model::{NewTask, Task, UsageRecord};
use crate::utils::error::Result;

/// Task collection keyed by id and owned by a user
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn create(&self, task: NewTask) -> Result<Task>;

    /// Tasks owned by `user_id`, newest first
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Task>>;

    async fn get(&self, id: Uuid) -> Result<Task>;

    async fn set_completed(&self, id: Uuid, completed: bool) -> Result<()>;

    async fn set_text(&self, id: Uuid, text: &str) -> Result<()>;

    /// `None` clears the due date
    async fn set_due_date(&self, id: Uuid, due_date: Option<String>) -> Result<()>;

    async fn mark_shared(&self, id: Uuid) -> Result<()>;

    async fn delete(&self, id: Uuid) -> Result<()>;
}

/// Per-user daily usage counters
#[async_trait]
pub trait UsageStore: Send + Sync {
    /// Upsert the (user, day) record and bump its count
    async fn increment(&self, user_id: &str, date: NaiveDate) -> Result<UsageRecord>;

    /// Count for (user, day), 0 when nothing was recorded
    async fn daily_count(&self, user_id: &str, date: NaiveDate) -> Result<u64>;
}

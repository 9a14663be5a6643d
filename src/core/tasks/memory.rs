//! In-memory task and usage store
//!
//! Process-lifetime storage; nothing survives a restart.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;
use uuid::Uuid;

use super::model::{NewTask, Task, UsageRecord, normalize_due_date};
use super::store::{TaskStore, UsageStore};
use crate::core::temporal::format_date;
use crate::utils::error::{GatewayError, Result};

#[derive(Debug, Clone)]
struct StoredTask {
    /// Insertion order, breaks `created_at` ties
    seq: u64,
    task: Task,
}

/// [`TaskStore`] and [`UsageStore`] over concurrent hash maps
#[derive(Debug, Default)]
pub struct MemoryStore {
    tasks: DashMap<Uuid, StoredTask>,
    usage: DashMap<(String, NaiveDate), UsageRecord>,
    next_seq: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    fn update<F>(&self, id: Uuid, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Task),
    {
        let mut entry = self
            .tasks
            .get_mut(&id)
            .ok_or_else(|| task_not_found(id))?;
        apply(&mut entry.task);
        Ok(())
    }
}

fn task_not_found(id: Uuid) -> GatewayError {
    GatewayError::not_found(format!("Task {} not found", id))
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn create(&self, task: NewTask) -> Result<Task> {
        let task = task.normalized()?;
        let stored = StoredTask {
            seq: self.next_seq.fetch_add(1, Ordering::Relaxed),
            task: Task {
                id: Uuid::new_v4(),
                user_id: task.user_id,
                text: task.text,
                completed: false,
                due_date: task.due_date,
                shared: false,
                created_at: Utc::now(),
            },
        };
        let created = stored.task.clone();
        self.tasks.insert(created.id, stored);
        debug!("Created task {} for {}", created.id, created.user_id);
        Ok(created)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Task>> {
        let mut owned: Vec<StoredTask> = self
            .tasks
            .iter()
            .filter(|entry| entry.task.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        owned.sort_by(|a, b| {
            b.task
                .created_at
                .cmp(&a.task.created_at)
                .then(b.seq.cmp(&a.seq))
        });
        Ok(owned.into_iter().map(|stored| stored.task).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Task> {
        self.tasks
            .get(&id)
            .map(|entry| entry.task.clone())
            .ok_or_else(|| task_not_found(id))
    }

    async fn set_completed(&self, id: Uuid, completed: bool) -> Result<()> {
        self.update(id, |task| task.completed = completed)
    }

    async fn set_text(&self, id: Uuid, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(GatewayError::validation("Task text cannot be empty"));
        }
        self.update(id, |task| task.text = text.to_string())
    }

    async fn set_due_date(&self, id: Uuid, due_date: Option<String>) -> Result<()> {
        let due_date = normalize_due_date(due_date)?;
        self.update(id, |task| task.due_date = due_date)
    }

    async fn mark_shared(&self, id: Uuid) -> Result<()> {
        self.update(id, |task| task.shared = true)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.tasks
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| task_not_found(id))
    }
}

#[async_trait]
impl UsageStore for MemoryStore {
    async fn increment(&self, user_id: &str, date: NaiveDate) -> Result<UsageRecord> {
        let now = Utc::now();
        let record = self
            .usage
            .entry((user_id.to_string(), date))
            .and_modify(|record| {
                record.count += 1;
                record.updated_at = now;
            })
            .or_insert_with(|| UsageRecord {
                user_id: user_id.to_string(),
                date: format_date(date),
                count: 1,
                updated_at: now,
            })
            .clone();
        Ok(record)
    }

    async fn daily_count(&self, user_id: &str, date: NaiveDate) -> Result<u64> {
        Ok(self
            .usage
            .get(&(user_id.to_string(), date))
            .map(|record| record.count)
            .unwrap_or(0))
    }
}

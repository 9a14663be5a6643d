//! Task and usage records

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::error::{GatewayError, Result};

/// A stored to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user_id: String,
    pub text: String,
    pub completed: bool,
    /// `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM`, wall-clock time
    pub due_date: Option<String>,
    pub shared: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Due date as a wall-clock instant; a date without time means midnight
    pub fn due_at(&self) -> Option<NaiveDateTime> {
        self.due_date.as_deref().and_then(parse_due_date)
    }

    /// Calendar day the task is due on
    pub fn due_day(&self) -> Option<NaiveDate> {
        self.due_at().map(|at| at.date())
    }
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM`, `YYYY-MM-DDTHH:MM:SS` and RFC 3339.
///
/// An RFC 3339 offset is dropped; the wall-clock reading is kept.
pub fn parse_due_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(at) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(at);
    }
    if let Ok(at) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(at);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN));
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|at| at.naive_local())
}

/// Input for creating a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub user_id: String,
    pub text: String,
    #[serde(default)]
    pub due_date: Option<String>,
}

impl NewTask {
    pub fn new(
        user_id: impl Into<String>,
        text: impl Into<String>,
        due_date: Option<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            text: text.into(),
            due_date,
        }
    }

    /// Trim fields and reject blank text or owner.
    ///
    /// An empty due date is treated as no due date.
    pub fn normalized(self) -> Result<Self> {
        let text = self.text.trim().to_string();
        if text.is_empty() {
            return Err(GatewayError::validation("Task text cannot be empty"));
        }
        let user_id = self.user_id.trim().to_string();
        if user_id.is_empty() {
            return Err(GatewayError::validation("userId is required"));
        }
        let due_date = normalize_due_date(self.due_date)?;
        Ok(Self {
            user_id,
            text,
            due_date,
        })
    }
}

/// Blank becomes `None`; anything else must parse as a due date
pub fn normalize_due_date(due_date: Option<String>) -> Result<Option<String>> {
    match due_date.map(|d| d.trim().to_string()) {
        None => Ok(None),
        Some(d) if d.is_empty() => Ok(None),
        Some(d) if parse_due_date(&d).is_some() => Ok(Some(d)),
        Some(d) => Err(GatewayError::validation(format!(
            "Invalid due date: {}",
            d
        ))),
    }
}

/// AI calls made by one user on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    pub user_id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub count: u64,
    pub updated_at: DateTime<Utc>,
}

//! Read-side helpers over task lists

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::model::Task;

/// Characters compared by [`has_similar_task`]
const SIMILARITY_PREFIX: usize = 20;

/// Whether `text` looks like a duplicate of an existing task.
///
/// Two texts are similar when either one contains the first twenty
/// characters of the other, ignoring case.
pub fn has_similar_task(tasks: &[Task], text: &str) -> bool {
    let candidate = text.trim().to_lowercase();
    if candidate.is_empty() {
        return false;
    }
    let candidate_prefix = prefix(&candidate);

    tasks.iter().any(|task| {
        let existing = task.text.to_lowercase();
        existing.contains(candidate_prefix) || candidate.contains(prefix(&existing))
    })
}

fn prefix(text: &str) -> &str {
    match text.char_indices().nth(SIMILARITY_PREFIX) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Tasks whose due date falls on `date`
pub fn tasks_due_on(tasks: &[Task], date: NaiveDate) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| task.due_day() == Some(date))
        .collect()
}

/// Open tasks whose due time has passed
pub fn is_overdue(task: &Task, now: NaiveDateTime) -> bool {
    !task.completed && task.due_at().is_some_and(|due| due < now)
}

/// Tasks with the given completion state, optionally limited to one due day
pub fn filter_tasks(tasks: &[Task], completed: bool, due_on: Option<NaiveDate>) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| task.completed == completed)
        .filter(|task| due_on.is_none_or(|date| task.due_day() == Some(date)))
        .collect()
}

/// Counters shown next to the task list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub due_today: usize,
    pub overdue: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task], now: NaiveDateTime) -> Self {
        let today = now.date();
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total: tasks.len(),
            pending: tasks.len() - completed,
            completed,
            due_today: tasks_due_on(tasks, today).len(),
            overdue: tasks.iter().filter(|t| is_overdue(t, now)).count(),
        }
    }
}

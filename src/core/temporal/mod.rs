//! Temporal phrase extraction
//!
//! Scans free-form task text for date and time keywords ("tomorrow",
//! "friday", "3:30pm", "evening", ...) and turns them into a calendar date
//! and a 24-hour clock time. Extraction is best effort and never fails:
//! text without any recognisable keyword yields an empty [`TemporalMatch`].

mod rules;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date and time found in a piece of text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalMatch {
    /// Resolved calendar date, serialised as `YYYY-MM-DD`
    pub date: Option<NaiveDate>,
    /// Clock time as zero-padded 24-hour `HH:MM`
    pub time: Option<String>,
    /// Every phrase that contributed, in rule order
    pub found_keywords: Vec<String>,
}

impl TemporalMatch {
    /// True when neither a date nor a time was recognised
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.time.is_none()
    }

    /// Due date string suitable for a task record, see [`compose_due_date`]
    pub fn due_date(&self) -> Option<String> {
        compose_due_date(self.date, self.time.as_deref())
    }
}

/// Extract relative to the local calendar date
pub fn extract(text: &str) -> TemporalMatch {
    extract_on(text, Local::now().date_naive())
}

/// Extract relative to `today`
///
/// Matching is case-insensitive substring matching. Date rules run in a
/// fixed order (today, tomorrow, weekdays Sunday..Saturday, next week) and
/// the last one to match wins. Time rules stop at the first explicit clock
/// expression; the part-of-day defaults only apply when none was found.
pub fn extract_on(text: &str, today: NaiveDate) -> TemporalMatch {
    let lower = text.to_lowercase();
    let mut found_keywords = Vec::new();

    let date = rules::resolve_date(&lower, today, &mut found_keywords);
    let time = rules::resolve_time(&lower, &mut found_keywords);

    TemporalMatch {
        date,
        time,
        found_keywords,
    }
}

/// `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Combine a date and an optional `HH:MM` time into a due-date string.
///
/// Produces `YYYY-MM-DDTHH:MM` when both are known and `YYYY-MM-DD` when only
/// the date is. A time on its own is not enough to schedule anything.
pub fn compose_due_date(date: Option<NaiveDate>, time: Option<&str>) -> Option<String> {
    let date = format_date(date?);
    match time.map(str::trim).filter(|t| !t.is_empty()) {
        Some(time) => Some(format!("{}T{}", date, time)),
        None => Some(date),
    }
}

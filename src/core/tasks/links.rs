//! Outbound links for a task

use chrono::{Duration, NaiveDateTime};
use url::Url;

use super::model::Task;
use crate::utils::error::{GatewayError, Result};

const CALENDAR_BASE: &str = "https://calendar.google.com/calendar/render";
const SHARE_BASE: &str = "https://wa.me/";

/// Google Calendar template link for a one-hour event.
///
/// Starts at the task's due time, or at `now` when it has none. Times are
/// written without a zone suffix so the calendar shows them as wall-clock
/// times.
pub fn calendar_link(task: &Task, now: NaiveDateTime) -> Result<String> {
    let start = task.due_at().unwrap_or(now);
    let end = start
        .checked_add_signed(Duration::hours(1))
        .ok_or_else(|| GatewayError::validation("Due date is out of range for a calendar event"))?;
    let dates = format!("{}/{}", calendar_stamp(start), calendar_stamp(end));

    let url = Url::parse_with_params(
        CALENDAR_BASE,
        &[
            ("action", "TEMPLATE"),
            ("text", task.text.as_str()),
            ("dates", dates.as_str()),
        ],
    )
    .map_err(|e| GatewayError::internal(format!("Failed to build calendar link: {}", e)))?;
    Ok(url.into())
}

/// WhatsApp share link carrying the task text
pub fn share_link(task: &Task) -> Result<String> {
    let url = Url::parse_with_params(SHARE_BASE, &[("text", task.text.as_str())])
        .map_err(|e| GatewayError::internal(format!("Failed to build share link: {}", e)))?;
    Ok(url.into())
}

fn calendar_stamp(at: NaiveDateTime) -> String {
    at.format("%Y%m%dT%H%M%S").to_string()
}

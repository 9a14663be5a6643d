//! Keyword rules behind [`extract_on`](super::extract_on)

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Weekday names in calendar order, Sunday first
const WEEKDAYS: [(&str, Weekday); 7] = [
    ("sunday", Weekday::Sun),
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
];

/// Part-of-day defaults, checked in order
const PERIODS: [(&str, &str, &str); 4] = [
    ("morning", "09:00", "morning (9am)"),
    ("afternoon", "14:00", "afternoon (2pm)"),
    ("evening", "18:00", "evening (6pm)"),
    ("night", "20:00", "night (8pm)"),
];

/// Explicit clock patterns, most specific first
static TIME_PATTERNS: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        // 3:30pm
        Regex::new(r"(?P<h>[0-9]{1,2}):(?P<m>[0-9]{2})\s*(?P<p>am|pm)")
            .expect("Invalid 12-hour clock regex"),
        // 3pm, 3 pm
        Regex::new(r"(?P<h>[0-9]{1,2})\s*(?P<p>am|pm)").expect("Invalid hour-period regex"),
        // 15:00
        Regex::new(r"(?P<h>[0-9]{1,2}):(?P<m>[0-9]{2})").expect("Invalid 24-hour clock regex"),
        // at 3
        Regex::new(r"at\s+(?P<h>[0-9]{1,2})").expect("Invalid at-hour regex"),
    ]
});

pub(super) fn resolve_date(
    lower: &str,
    today: NaiveDate,
    keywords: &mut Vec<String>,
) -> Option<NaiveDate> {
    let mut date = None;

    if lower.contains("today") {
        date = Some(today);
        keywords.push("today".to_string());
    }

    if lower.contains("tomorrow") {
        date = today.checked_add_days(Days::new(1)).or(date);
        keywords.push("tomorrow".to_string());
    }

    for (name, weekday) in WEEKDAYS {
        if lower.contains(name) {
            date = next_weekday(today, weekday).or(date);
            keywords.push(name.to_string());
        }
    }

    if lower.contains("next week") {
        date = today.checked_add_days(Days::new(7)).or(date);
        keywords.push("next week".to_string());
    }

    date
}

/// Next occurrence of `weekday` strictly after `today` (a full week ahead on
/// the same weekday)
fn next_weekday(today: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let target = i64::from(weekday.num_days_from_sunday());
    let current = i64::from(today.weekday().num_days_from_sunday());
    let mut offset = target - current;
    if offset <= 0 {
        offset += 7;
    }
    today.checked_add_days(Days::new(offset.unsigned_abs()))
}

pub(super) fn resolve_time(lower: &str, keywords: &mut Vec<String>) -> Option<String> {
    if let Some(time) = explicit_time(lower) {
        keywords.push(format!("time: {}", time));
        return Some(time);
    }

    PERIODS
        .iter()
        .find(|(word, _, _)| lower.contains(word))
        .map(|(_, time, keyword)| {
            keywords.push(keyword.to_string());
            time.to_string()
        })
}

/// Time from the first pattern that matches, first match only.
///
/// A reading that is not a real `HH:MM` ("9:75", "25:00") yields no
/// explicit time; later patterns are not consulted.
fn explicit_time(lower: &str) -> Option<String> {
    let caps = TIME_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(lower))?;
    clock_time(&caps)
}

/// Normalise one match to 24-hour `HH:MM`
fn clock_time(caps: &Captures<'_>) -> Option<String> {
    let mut hour: u32 = caps.name("h")?.as_str().parse().ok()?;
    let minute: u32 = match caps.name("m") {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    match caps.name("p").map(|p| p.as_str()) {
        Some("pm") if hour < 12 => hour += 12,
        Some("am") if hour == 12 => hour = 0,
        _ => {}
    }

    NaiveTime::from_hms_opt(hour, minute, 0).map(|t| t.format("%H:%M").to_string())
}

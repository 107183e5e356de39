use crate::scan::types::TimestampMs;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::collections::HashMap;

// Values without an offset are read as UTC. `%B` also accepts abbreviated month names.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
    "%B %d %H:%M:%S%.f %Y",
    "%B %d %Y %H:%M:%S%.f",
    "%B %d %Y %H:%M",
    "%d %B %Y %H:%M:%S%.f",
    "%d %B %Y %H:%M",
];

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%Y%m%d",
    "%d %B %Y",
    "%B %d %Y",
];

const WEEKDAYS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

const UTC_ZONES: [&str; 4] = ["utc", "gmt", "z", "ut"];

/// Extract the timestamp of a log line from its second comma-separated field.
pub fn parse_timestamp(line: &str) -> Option<TimestampMs> {
    let field = line.trim().split(',').nth(1)?;
    parse_datetime_ms(field).map(TimestampMs)
}

fn parse_datetime_ms(field: &str) -> Option<i64> {
    let normalized = field.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(&normalized) {
        return Some(dt.timestamp_millis());
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, fmt) {
            return Some(dt.timestamp_millis());
        }
    }

    // A generic date parser does not care which day of the week it is told,
    // and a UTC zone word may sit anywhere (`date(1)` puts it before the year).
    let text = strip_utc_zone(strip_weekday(&normalized));

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&text, fmt) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&text, fmt) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp_millis());
        }
    }

    None
}

fn strip_weekday(text: &str) -> &str {
    let Some((head, rest)) = text.split_once(' ') else {
        return text;
    };

    let head = head.trim_end_matches(',');
    let is_weekday = head.len() >= 3
        && head.chars().all(|c| c.is_ascii_alphabetic())
        && WEEKDAYS.contains(&head[..3].to_ascii_lowercase().as_str());

    if is_weekday { rest } else { text }
}

/// Drop standalone UTC zone words and a `Z` glued to the end of the time.
fn strip_utc_zone(text: &str) -> String {
    text.split(' ')
        .filter(|word| !UTC_ZONES.contains(&word.to_ascii_lowercase().as_str()))
        .map(|word| match word.strip_suffix(['Z', 'z']) {
            Some(time) if time.ends_with(|c: char| c.is_ascii_digit()) => time,
            _ => word,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Per-scan memo of line text -> parsed timestamp.
///
/// Identical lines are common (the same event logged once per vbucket), so each
/// distinct line is parsed once. Failed parses are remembered too.
#[derive(Debug, Default)]
pub struct TimestampCache {
    entries: HashMap<String, Option<TimestampMs>>,
    hits: u64,
}

impl TimestampCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, line: &str) -> Option<TimestampMs> {
        if let Some(ts) = self.entries.get(line) {
            self.hits += 1;
            return *ts;
        }

        let ts = parse_timestamp(line);
        self.entries.insert(line.to_string(), ts);
        ts
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }
}

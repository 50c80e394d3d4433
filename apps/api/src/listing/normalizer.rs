//! Job Record Normalizer — maps loosely-shaped source records onto `JobRecord`.
//!
//! Runs once, right after the record source returns, so every predicate
//! downstream works on one typed shape with no missing fields.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::models::job::{JobRecord, RawJobRecord};

/// Normalizes a single raw record. `index` is the record's position in the
/// fetch result and only matters when the record carries no id of its own.
pub fn normalize_record(raw: &RawJobRecord, index: usize, now: DateTime<Utc>) -> JobRecord {
    let id = first_text(raw.id.as_ref(), raw.object_id.as_ref());
    let id = if id.is_empty() {
        format!("job-{index}")
    } else {
        id
    };

    JobRecord {
        id,
        title: text_of(raw.title.as_ref()),
        company: text_of(raw.company.as_ref()),
        location: first_text(raw.location.as_ref(), raw.city.as_ref()),
        job_type: first_text(raw.kind.as_ref(), raw.job_type.as_ref()),
        salary: first_text(raw.salary.as_ref(), raw.salary_range.as_ref()),
        posted: normalize_posted(raw.posted.as_ref(), raw.posted_at.as_ref(), now),
        saved: is_truthy(raw.saved.as_ref()),
        description: text_of(raw.description.as_ref()),
    }
}

pub fn normalize_records(raws: &[RawJobRecord], now: DateTime<Utc>) -> Vec<JobRecord> {
    raws.iter()
        .enumerate()
        .map(|(index, raw)| normalize_record(raw, index, now))
        .collect()
}

/// Renders a JSON value as display text. Objects contribute their `name`
/// (a populated `company` reference, for instance); anything else is empty.
fn text_of(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Object(map)) => text_of(map.get("name")),
        _ => String::new(),
    }
}

fn first_text(primary: Option<&Value>, alias: Option<&Value>) -> String {
    let text = text_of(primary);
    if text.is_empty() {
        text_of(alias)
    } else {
        text
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes"),
        _ => false,
    }
}

/// Relative ages pass through untouched. Absolute timestamps (RFC 3339 or a
/// bare `YYYY-MM-DD`) are turned into "N days" relative to `now`.
fn normalize_posted(posted: Option<&Value>, posted_at: Option<&Value>, now: DateTime<Utc>) -> String {
    let text = first_text(posted, posted_at);

    let posted_on = DateTime::parse_from_rfc3339(&text)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(&text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        });

    match posted_on {
        Some(dt) => {
            let days = (now - dt).num_days().max(0);
            format!("{days} days")
        }
        None => text,
    }
}

//! Predicate Evaluators — pure per-record match rules and the parsers they rely on.
//!
//! Text rules are case-insensitive substring matches; categorical rules are
//! case-insensitive equality. Salary and posted-age strings are parsed on
//! demand with lossy heuristics that never fail.

use serde::{Deserialize, Serialize};

use crate::models::job::JobRecord;

/// Day count reported for posted ages that cannot be parsed. Larger than any
/// realistic "posted within" window, so such records drop out of bounded filters.
pub const POSTED_DAYS_UNKNOWN: u32 = 9999;

const CURRENCY_SYMBOLS: &[char] = &['₹', '$', '€', '£'];
const RANGE_SEPARATORS: [char; 2] = ['-', '–'];

/// Numeric salary bounds parsed from a formatted salary string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
}

/// Parses a formatted salary such as `"₹3,00,000 – ₹4,50,000"`.
///
/// Currency symbols and thousands separators are stripped, the rest is split
/// on a dash. The first token is `min`; the second (or the first again, when
/// there is no second) is `max`. Each token is read as its leading integer and
/// anything non-numeric becomes 0. This is lossy: `"Rs 30k"` parses as 0 and a
/// period used as a thousands separator truncates the number.
pub fn parse_salary_range(salary: &str) -> SalaryRange {
    let cleaned: String = salary
        .chars()
        .filter(|c| !CURRENCY_SYMBOLS.contains(c) && *c != ',')
        .collect();

    let mut tokens = cleaned.split(RANGE_SEPARATORS);
    let min = tokens.next().and_then(leading_integer).unwrap_or(0);
    let max = match tokens.next().filter(|t| !t.trim().is_empty()) {
        Some(token) => leading_integer(token).unwrap_or(0),
        None => min,
    };

    SalaryRange { min, max }
}

/// Parses a relative age such as `"3 days"` or `"2 weeks"` into days.
/// No leading integer, or a unit other than days/weeks, yields
/// [`POSTED_DAYS_UNKNOWN`].
pub fn parse_posted_days(posted: &str) -> u32 {
    let lower = posted.to_lowercase();
    let Some(n) = leading_integer(&lower).and_then(|n| u32::try_from(n).ok()) else {
        return POSTED_DAYS_UNKNOWN;
    };

    if lower.contains("week") {
        n.saturating_mul(7)
    } else if lower.contains("day") {
        n
    } else {
        POSTED_DAYS_UNKNOWN
    }
}

fn leading_integer(token: &str) -> Option<u64> {
    let token = token.trim_start();
    let end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    token[..end].parse().ok()
}

/// An active filter rule. Inactive filter dimensions never become a
/// `Predicate`; see `FilterState::active_predicates`.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Lowercased search term.
    Text(String),
    /// Lowercased location fragment.
    Location(String),
    /// Lowercased job type.
    JobType(String),
    SavedOnly,
    PostedWithin(u32),
    Salary { min: Option<u64>, max: Option<u64> },
}

impl Predicate {
    pub fn matches(&self, record: &JobRecord) -> bool {
        match self {
            Predicate::Text(term) => matches_text(record, term),
            Predicate::Location(location) => matches_location(record, location),
            Predicate::JobType(job_type) => matches_job_type(record, job_type),
            Predicate::SavedOnly => record.saved,
            Predicate::PostedWithin(days) => parse_posted_days(&record.posted) <= *days,
            Predicate::Salary { min, max } => matches_salary(record, *min, *max),
        }
    }
}

pub fn matches_text(record: &JobRecord, term: &str) -> bool {
    [&record.title, &record.company, &record.location]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

pub fn matches_location(record: &JobRecord, location: &str) -> bool {
    record.location.to_lowercase().contains(location)
}

pub fn matches_job_type(record: &JobRecord, job_type: &str) -> bool {
    record.job_type.to_lowercase() == job_type
}

/// Overlap test between the record's parsed range and the requested bounds.
pub fn matches_salary(record: &JobRecord, min: Option<u64>, max: Option<u64>) -> bool {
    let range = parse_salary_range(&record.salary);
    if min.is_some_and(|min| range.max < min) {
        return false;
    }
    if max.is_some_and(|max| range.min > max) {
        return false;
    }
    true
}

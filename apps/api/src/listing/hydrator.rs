//! URL Parameter Hydrator — seeds filter state from query-string parameters.
//!
//! The query string is passed in as a plain map, so hydration is a pure
//! function of `(params, current state)`. Only parameters that are present
//! overwrite anything; absent ones leave the current value alone.

use std::collections::HashMap;

use tracing::debug;

use crate::listing::filter::{FilterState, PostedWithin};
use crate::models::job::JobRecord;

pub type QueryParams = HashMap<String, String>;

// Primary name first; it wins when both are present.
const SEARCH_PARAMS: &[&str] = &["search", "q"];
const LOCATION_PARAMS: &[&str] = &["location", "city"];
const JOB_TYPE_PARAMS: &[&str] = &["type", "jobType"];
const SAVED_PARAM: &str = "saved";
const POSTED_WITHIN_PARAM: &str = "postedWithin";
const MIN_SALARY_PARAM: &str = "minSalary";
const MAX_SALARY_PARAM: &str = "maxSalary";
const JOB_ID_PARAM: &str = "jobId";

fn param<'a>(params: &'a QueryParams, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .find_map(|name| params.get(*name))
        .map(String::as_str)
}

/// Returns `current` with every recognized, present parameter applied.
pub fn hydrate_filters(params: &QueryParams, current: &FilterState) -> FilterState {
    let mut next = current.clone();

    if let Some(search) = param(params, SEARCH_PARAMS) {
        next.search_term = search.to_string();
    }
    if let Some(location) = param(params, LOCATION_PARAMS) {
        next.location = location.to_string();
    }
    if let Some(job_type) = param(params, JOB_TYPE_PARAMS) {
        next.job_type = job_type.to_string();
    }
    if let Some(saved) = param(params, &[SAVED_PARAM]) {
        next.more_filters.only_saved = is_affirmative(saved);
    }
    if let Some(raw) = param(params, &[POSTED_WITHIN_PARAM]) {
        match raw.parse::<PostedWithin>() {
            Ok(posted_within) => next.more_filters.posted_within = posted_within,
            Err(e) => debug!("Ignoring {POSTED_WITHIN_PARAM}: {e}"),
        }
    }
    if let Some(raw) = param(params, &[MIN_SALARY_PARAM]) {
        if let Some(bound) = parse_salary_bound(MIN_SALARY_PARAM, raw) {
            next.more_filters.min_salary = bound;
        }
    }
    if let Some(raw) = param(params, &[MAX_SALARY_PARAM]) {
        if let Some(bound) = parse_salary_bound(MAX_SALARY_PARAM, raw) {
            next.more_filters.max_salary = bound;
        }
    }

    next
}

/// Finds the record named by `jobId`, if any. An id that matches nothing is
/// not an error: no detail view opens.
pub fn resolve_detail<'a>(params: &QueryParams, records: &'a [JobRecord]) -> Option<&'a JobRecord> {
    let job_id = param(params, &[JOB_ID_PARAM])?.trim();
    if job_id.is_empty() {
        return None;
    }
    let found = records.iter().find(|r| r.id == job_id);
    if found.is_none() {
        debug!("{JOB_ID_PARAM}={job_id} does not match any record");
    }
    found
}

fn is_affirmative(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

/// `Some(None)` clears the bound (empty value), `Some(Some(n))` sets it and
/// `None` means the value was unusable and the field stays as it was.
fn parse_salary_bound(name: &str, raw: &str) -> Option<Option<u64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(None);
    }
    match raw.parse::<u64>() {
        Ok(n) => Some(Some(n)),
        Err(_) => {
            debug!("Ignoring {name}: '{raw}' is not a whole number");
            None
        }
    }
}

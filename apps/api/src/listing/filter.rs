//! Filter Pipeline — combines every active predicate with AND over the full record list.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::listing::predicates::Predicate;
use crate::models::job::JobRecord;

/// Location value meaning "no location filter".
pub const ALL_LOCATIONS: &str = "All Locations";
/// Job type value meaning "no job type filter".
pub const ALL_JOB_TYPES: &str = "all";

/// "Posted within" window. `Any` disables the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PostedWithinRepr", into = "PostedWithinRepr")]
pub enum PostedWithin {
    #[default]
    Any,
    Days(u32),
}

/// Wire form: the string `"any"` or a day count (as a number or numeric string).
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PostedWithinRepr {
    Days(u32),
    Text(String),
}

impl TryFrom<PostedWithinRepr> for PostedWithin {
    type Error = String;

    fn try_from(repr: PostedWithinRepr) -> Result<Self, Self::Error> {
        match repr {
            PostedWithinRepr::Days(days) => Ok(PostedWithin::Days(days)),
            PostedWithinRepr::Text(text) => text.parse(),
        }
    }
}

impl From<PostedWithin> for PostedWithinRepr {
    fn from(value: PostedWithin) -> Self {
        match value {
            PostedWithin::Any => PostedWithinRepr::Text("any".to_string()),
            PostedWithin::Days(days) => PostedWithinRepr::Days(days),
        }
    }
}

impl FromStr for PostedWithin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("any") {
            return Ok(PostedWithin::Any);
        }
        s.parse::<u32>()
            .map(PostedWithin::Days)
            .map_err(|_| format!("postedWithin must be \"any\" or a day count, got '{s}'"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoreFilters {
    pub posted_within: PostedWithin,
    pub min_salary: Option<u64>,
    pub max_salary: Option<u64>,
    pub only_saved: bool,
}

/// Everything the user (or the URL) has asked to filter by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_term: String,
    pub location: String,
    pub job_type: String,
    pub more_filters: MoreFilters,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            location: ALL_LOCATIONS.to_string(),
            job_type: ALL_JOB_TYPES.to_string(),
            more_filters: MoreFilters::default(),
        }
    }
}

impl FilterState {
    /// Builds the predicates for every active dimension. Sentinel and empty
    /// values produce no predicate at all. The search term is matched as
    /// typed, surrounding whitespace included.
    pub fn active_predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if !self.search_term.is_empty() {
            predicates.push(Predicate::Text(self.search_term.to_lowercase()));
        }

        let location = self.location.trim();
        if !location.is_empty() && !location.eq_ignore_ascii_case(ALL_LOCATIONS) {
            predicates.push(Predicate::Location(location.to_lowercase()));
        }

        let job_type = self.job_type.trim();
        if !job_type.is_empty() && !job_type.eq_ignore_ascii_case(ALL_JOB_TYPES) {
            predicates.push(Predicate::JobType(job_type.to_lowercase()));
        }

        let more = &self.more_filters;
        if more.only_saved {
            predicates.push(Predicate::SavedOnly);
        }
        if let PostedWithin::Days(days) = more.posted_within {
            predicates.push(Predicate::PostedWithin(days));
        }
        if more.min_salary.is_some() || more.max_salary.is_some() {
            predicates.push(Predicate::Salary {
                min: more.min_salary,
                max: more.max_salary,
            });
        }

        predicates
    }

    pub fn has_active_filters(&self) -> bool {
        !self.active_predicates().is_empty()
    }
}

/// Returns the records matching every active predicate, in list order.
/// The input list is never modified; each call recomputes from scratch.
pub fn apply_filters<'a>(records: &'a [JobRecord], filters: &FilterState) -> Vec<&'a JobRecord> {
    let predicates = filters.active_predicates();
    records
        .iter()
        .filter(|record| predicates.iter().all(|p| p.matches(record)))
        .collect()
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A job record as delivered by the record source. Every field is optional and
/// loosely typed: different backends (and the demo list) use different names
/// for the same thing, and numbers sometimes arrive where strings are expected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawJobRecord {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, rename = "_id")]
    pub object_id: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub company: Option<Value>,
    #[serde(default)]
    pub location: Option<Value>,
    #[serde(default)]
    pub city: Option<Value>,
    #[serde(default, rename = "type")]
    pub kind: Option<Value>,
    #[serde(default)]
    pub job_type: Option<Value>,
    #[serde(default)]
    pub salary: Option<Value>,
    #[serde(default)]
    pub salary_range: Option<Value>,
    #[serde(default)]
    pub posted: Option<Value>,
    #[serde(default)]
    pub posted_at: Option<Value>,
    #[serde(default)]
    pub saved: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
}

/// Canonical job record. Every string field is present (possibly empty), so
/// predicates never deal with missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    /// Formatted salary as displayed, e.g. "₹3,00,000 – ₹4,50,000".
    pub salary: String,
    /// Relative age as displayed, e.g. "3 days".
    pub posted: String,
    pub saved: bool,
    pub description: String,
}

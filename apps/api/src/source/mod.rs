//! Record source — where a listing session's jobs come from.
//!
//! A session fetches its records once, when it mounts. A failed fetch is never
//! surfaced: `load_records` logs it and falls back to the built-in demo list.
//!
//! `AppState` holds an `Arc<dyn RecordSource>`, chosen at startup from config.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::listing::normalizer::normalize_records;
use crate::models::job::{JobRecord, RawJobRecord};

pub mod demo;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Jobs endpoint returned status {status}")]
    Status { status: u16 },

    #[error("Jobs payload has no job list (expected an array, or an object with `jobs` or `data`)")]
    UnexpectedShape,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<RawJobRecord>, SourceError>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}

/// One-shot GET against a jobs-listing endpoint. No retries.
pub struct HttpRecordSource {
    client: Client,
    url: String,
}

impl HttpRecordSource {
    pub fn new(url: String, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch(&self) -> Result<Vec<RawJobRecord>, SourceError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        let jobs = extract_job_list(body).ok_or(SourceError::UnexpectedShape)?;
        let records: Vec<RawJobRecord> = serde_json::from_value(jobs)?;

        debug!("Fetched {} job records from {}", records.len(), self.url);
        Ok(records)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Serves the built-in demo list.
pub struct DemoRecordSource;

#[async_trait]
impl RecordSource for DemoRecordSource {
    async fn fetch(&self) -> Result<Vec<RawJobRecord>, SourceError> {
        Ok(demo::demo_records())
    }

    fn name(&self) -> &'static str {
        "demo"
    }
}

/// Accepts a bare array, or an object wrapping one under `jobs` or `data`.
fn extract_job_list(body: Value) -> Option<Value> {
    match body {
        Value::Array(items) => Some(Value::Array(items)),
        Value::Object(mut map) => ["jobs", "data"]
            .iter()
            .find_map(|key| map.remove(*key).filter(Value::is_array)),
        _ => None,
    }
}

/// Fetches and normalizes a session's records, substituting the demo list on
/// any fetch failure.
pub async fn load_records(source: &dyn RecordSource, now: DateTime<Utc>) -> Vec<JobRecord> {
    let raws = match source.fetch().await {
        Ok(raws) => raws,
        Err(e) => {
            warn!(
                "Record source '{}' failed, using demo list: {e}",
                source.name()
            );
            demo::demo_records()
        }
    };
    normalize_records(&raws, now)
}

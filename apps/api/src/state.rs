use std::sync::Arc;

use crate::config::Config;
use crate::sessions::SessionStore;
use crate::source::RecordSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Where sessions fetch their records. HTTP when JOBS_API_URL is set, demo list otherwise.
    pub source: Arc<dyn RecordSource>,
    pub sessions: SessionStore,
}

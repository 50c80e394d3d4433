//! Axum route handlers for job listings and listing sessions.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::listing::board::{FilterUpdate, JobBoard, ListingPage};
use crate::listing::hydrator::QueryParams;
use crate::models::job::JobRecord;
use crate::source::load_records;
use crate::state::AppState;

const PAGES_PARAM: &str = "pages";

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub page: ListingPage,
}

#[derive(Debug, Serialize)]
pub struct SavedToggleResponse {
    pub job_id: String,
    pub saved: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs
///
/// Stateless search: fetches records, hydrates filters from the query string
/// and renders `pages` pages (default 1) in one go.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<ListingPage>, AppError> {
    let pages = match params.get(PAGES_PARAM) {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                AppError::Validation(format!("{PAGES_PARAM} must be a positive integer"))
            })?,
        None => 1,
    };

    let records = load_records(state.source.as_ref(), Utc::now()).await;
    let mut board = JobBoard::mount(records, &params);
    for _ in 1..pages {
        if !board.can_load_more() {
            break;
        }
        board.load_more();
    }

    Ok(Json(board.page()))
}

/// POST /api/v1/sessions
///
/// Mounts a listing session: records are fetched once and filters are
/// hydrated from the query string. A resolvable `jobId` opens its detail view.
pub async fn handle_create_session(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let records = load_records(state.source.as_ref(), Utc::now()).await;
    let board = JobBoard::mount(records, &params);
    let page = board.page();
    let session_id = state.sessions.insert(board).await;

    info!(
        session = %session_id,
        records = page.total_records,
        matches = page.total_matches,
        "Listing session mounted"
    );

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse { session_id, page }),
    ))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ListingPage>, AppError> {
    state
        .sessions
        .read(id, JobBoard::page)
        .await
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.remove(id).await {
        return Err(session_not_found(id));
    }
    info!(session = %id, "Listing session closed");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/sessions/:id/filters
///
/// Partial filter update. Any real change resets the pagination window.
pub async fn handle_update_filters(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    update: Result<Json<FilterUpdate>, JsonRejection>,
) -> Result<Json<ListingPage>, AppError> {
    let Json(update) = update.map_err(|e| AppError::Validation(e.body_text()))?;

    state
        .sessions
        .update(id, |board| {
            let changed = board.update_filters(update);
            debug!(session = %id, changed, filters = ?board.filters(), "Filter update");
            board.page()
        })
        .await
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

/// POST /api/v1/sessions/:id/hydrate
///
/// Re-applies query parameters after a URL change. Only parameters present
/// in the query overwrite the session's filters; the window always resets.
pub async fn handle_hydrate_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<QueryParams>,
) -> Result<Json<ListingPage>, AppError> {
    state
        .sessions
        .update(id, |board| {
            board.hydrate(&params);
            board.page()
        })
        .await
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

/// DELETE /api/v1/sessions/:id/filters
pub async fn handle_clear_filters(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ListingPage>, AppError> {
    state
        .sessions
        .update(id, |board| {
            board.clear_filters();
            board.page()
        })
        .await
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

/// POST /api/v1/sessions/:id/load-more
pub async fn handle_load_more(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ListingPage>, AppError> {
    let page = state
        .sessions
        .update(id, |board| {
            board.load_more();
            board.page()
        })
        .await
        .ok_or_else(|| session_not_found(id))?;

    debug!(
        session = %id,
        visible = page.visible_count,
        matches = page.total_matches,
        "Loaded more jobs"
    );
    Ok(Json(page))
}

/// POST /api/v1/sessions/:id/jobs/:job_id/saved
///
/// Flips the saved flag on one record of the session's full list.
pub async fn handle_toggle_saved(
    State(state): State<AppState>,
    Path((id, job_id)): Path<(Uuid, String)>,
) -> Result<Json<SavedToggleResponse>, AppError> {
    let toggled = state
        .sessions
        .update(id, |board| board.toggle_saved(&job_id))
        .await
        .ok_or_else(|| session_not_found(id))?;

    let saved = toggled.ok_or_else(|| job_not_found(&job_id))?;
    Ok(Json(SavedToggleResponse { job_id, saved }))
}

/// GET /api/v1/sessions/:id/jobs/:job_id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path((id, job_id)): Path<(Uuid, String)>,
) -> Result<Json<JobRecord>, AppError> {
    let record = state
        .sessions
        .read(id, |board| board.find(&job_id).cloned())
        .await
        .ok_or_else(|| session_not_found(id))?;

    record.map(Json).ok_or_else(|| job_not_found(&job_id))
}

/// DELETE /api/v1/sessions/:id/detail
pub async fn handle_close_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ListingPage>, AppError> {
    state
        .sessions
        .update(id, |board| {
            board.close_detail();
            board.page()
        })
        .await
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

fn job_not_found(job_id: &str) -> AppError {
    AppError::NotFound(format!("Job {job_id} not found"))
}

pub mod health;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::listing::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless search
        .route("/api/v1/jobs", get(handlers::handle_search))
        // Listing sessions
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/filters",
            patch(handlers::handle_update_filters)
                .delete(handlers::handle_clear_filters),
        )
        .route(
            "/api/v1/sessions/:id/hydrate",
            post(handlers::handle_hydrate_session),
        )
        .route(
            "/api/v1/sessions/:id/load-more",
            post(handlers::handle_load_more),
        )
        .route(
            "/api/v1/sessions/:id/detail",
            delete(handlers::handle_close_detail),
        )
        .route(
            "/api/v1/sessions/:id/jobs/:job_id",
            get(handlers::handle_get_job),
        )
        .route(
            "/api/v1/sessions/:id/jobs/:job_id/saved",
            post(handlers::handle_toggle_saved),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::sessions::SessionStore;
    use crate::source::DemoRecordSource;

    fn test_app() -> Router {
        let config = Config {
            jobs_api_url: None,
            fetch_timeout_secs: 1,
            max_sessions: 8,
            port: 0,
            rust_log: "debug".to_string(),
        };
        build_router(AppState {
            sessions: SessionStore::new(config.max_sessions),
            config,
            source: Arc::new(DemoRecordSource),
        })
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn job_ids(page: &Value) -> Vec<String> {
        page["jobs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|j| j["id"].as_str().unwrap().to_string())
            .collect()
    }

    async fn create_session(app: &Router, query: &str) -> (String, Value) {
        let (status, body) = send(app, "POST", &format!("/api/v1/sessions{query}"), None).await;
        assert_eq!(status, StatusCode::CREATED);
        (body["session_id"].as_str().unwrap().to_string(), body["page"].clone())
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_app();
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["record_source"], "demo");
        assert_eq!(body["sessions"]["max"], 8);
    }

    #[tokio::test]
    async fn test_search_without_params_returns_first_page() {
        let app = test_app();
        let (status, page) = send(&app, "GET", "/api/v1/jobs", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["total_matches"], 14);
        assert_eq!(page["visible_count"], 6);
        assert_eq!(page["can_load_more"], true);
        assert_eq!(page["filters_active"], false);
        assert_eq!(job_ids(&page), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[tokio::test]
    async fn test_search_hydrates_from_query() {
        let app = test_app();
        let (_, page) = send(&app, "GET", "/api/v1/jobs?q=nurse", None).await;
        assert_eq!(job_ids(&page), vec!["2", "3", "11"]);
        assert_eq!(page["filters"]["search_term"], "nurse");
        assert_eq!(page["filters"]["location"], "All Locations");

        let (_, page) = send(&app, "GET", "/api/v1/jobs?city=Mumbai&type=Part-time", None).await;
        assert_eq!(job_ids(&page), vec!["6"]);

        let (_, page) = send(
            &app,
            "GET",
            "/api/v1/jobs?minSalary=100000&postedWithin=7",
            None,
        )
        .await;
        assert_eq!(job_ids(&page), vec!["1", "4"]);
    }

    #[tokio::test]
    async fn test_search_pages() {
        let app = test_app();
        let (_, page) = send(&app, "GET", "/api/v1/jobs?pages=2", None).await;
        assert_eq!(page["visible_count"], 12);
        assert_eq!(page["can_load_more"], true);

        let (_, page) = send(&app, "GET", "/api/v1/jobs?pages=10", None).await;
        assert_eq!(page["visible_count"], 14);
        assert_eq!(page["can_load_more"], false);
    }

    #[tokio::test]
    async fn test_search_rejects_bad_pages() {
        let app = test_app();
        for query in ["pages=0", "pages=two"] {
            let (status, body) = send(&app, "GET", &format!("/api/v1/jobs?{query}"), None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{query}");
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_session_mount_opens_detail() {
        let app = test_app();
        let (_, page) = create_session(&app, "?jobId=4").await;
        assert_eq!(page["detail"]["id"], "4");
        assert_eq!(page["detail"]["title"], "Radiologist");

        let (_, page) = create_session(&app, "?jobId=999").await;
        assert!(page["detail"].is_null());
    }

    #[tokio::test]
    async fn test_session_filter_and_pagination_flow() {
        let app = test_app();
        let (id, page) = create_session(&app, "").await;
        assert_eq!(page["visible_count"], 6);

        let (_, page) = send(&app, "POST", &format!("/api/v1/sessions/{id}/load-more"), None).await;
        assert_eq!(page["visible_count"], 12);

        let (status, page) = send(
            &app,
            "PATCH",
            &format!("/api/v1/sessions/{id}/filters"),
            Some(json!({"job_type": "Full-time"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["total_matches"], 9);
        assert_eq!(page["visible_count"], 6);

        let (_, page) = send(&app, "POST", &format!("/api/v1/sessions/{id}/load-more"), None).await;
        assert_eq!(page["visible_count"], 9);
        assert_eq!(page["can_load_more"], false);

        let (_, page) = send(&app, "DELETE", &format!("/api/v1/sessions/{id}/filters"), None).await;
        assert_eq!(page["total_matches"], 14);
        assert_eq!(page["visible_count"], 6);

        let (_, page) = send(&app, "GET", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(page["filters_active"], false);
    }

    #[tokio::test]
    async fn test_rehydrate_keeps_absent_params() {
        let app = test_app();
        let (id, page) = create_session(&app, "?city=Pune").await;
        assert_eq!(page["filters"]["location"], "Pune");

        let (_, page) = send(&app, "POST", &format!("/api/v1/sessions/{id}/load-more"), None).await;
        assert_eq!(page["filters"]["location"], "Pune");

        let (status, page) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/hydrate?search=Cardiologist"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["filters"]["location"], "Pune");
        assert_eq!(page["filters"]["search_term"], "Cardiologist");
        assert_eq!(page["visible_count"], 0);

        let (_, page) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/hydrate?location=All%20Locations&jobId=8"),
            None,
        )
        .await;
        assert_eq!(page["filters"]["search_term"], "Cardiologist");
        assert_eq!(job_ids(&page), vec!["1"]);
        assert_eq!(page["detail"]["id"], "8");
    }

    #[tokio::test]
    async fn test_rehydrate_resets_window() {
        let app = test_app();
        let (id, _) = create_session(&app, "").await;
        let (_, page) = send(&app, "POST", &format!("/api/v1/sessions/{id}/load-more"), None).await;
        assert_eq!(page["visible_count"], 12);

        let (_, page) = send(&app, "POST", &format!("/api/v1/sessions/{id}/hydrate?type=all"), None).await;
        assert_eq!(page["visible_count"], 6);
        assert_eq!(page["total_matches"], 14);

        let missing = uuid::Uuid::new_v4();
        let (status, _) = send(&app, "POST", &format!("/api/v1/sessions/{missing}/hydrate"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_saved_toggle_feeds_only_saved_filter() {
        let app = test_app();
        let (id, _) = create_session(&app, "").await;

        let (status, body) = send(&app, "POST", &format!("/api/v1/sessions/{id}/jobs/12/saved"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"job_id": "12", "saved": true}));

        let (_, page) = send(
            &app,
            "PATCH",
            &format!("/api/v1/sessions/{id}/filters"),
            Some(json!({"only_saved": true})),
        )
        .await;
        assert_eq!(job_ids(&page), vec!["12"]);
        assert_eq!(page["jobs"][0]["saved"], true);

        let (_, job) = send(&app, "GET", &format!("/api/v1/sessions/{id}/jobs/12"), None).await;
        assert_eq!(job["saved"], true);
        let (_, job) = send(&app, "GET", &format!("/api/v1/sessions/{id}/jobs/11"), None).await;
        assert_eq!(job["saved"], false);
    }

    #[tokio::test]
    async fn test_saved_state_is_per_session() {
        let app = test_app();
        let (first, _) = create_session(&app, "").await;
        let (second, _) = create_session(&app, "").await;

        send(&app, "POST", &format!("/api/v1/sessions/{first}/jobs/1/saved"), None).await;
        let (_, job) = send(&app, "GET", &format!("/api/v1/sessions/{second}/jobs/1"), None).await;
        assert_eq!(job["saved"], false);
    }

    #[tokio::test]
    async fn test_unknown_session_and_job_are_404() {
        let app = test_app();
        let missing = uuid::Uuid::new_v4();
        let (status, body) = send(&app, "GET", &format!("/api/v1/sessions/{missing}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (id, _) = create_session(&app, "").await;
        let (status, _) = send(&app, "POST", &format!("/api/v1/sessions/{id}/jobs/nope/saved"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, "GET", &format!("/api/v1/sessions/{id}/jobs/nope"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_malformed_filter_update_is_400() {
        let app = test_app();
        let (id, _) = create_session(&app, "").await;
        let (status, body) = send(
            &app,
            "PATCH",
            &format!("/api/v1/sessions/{id}/filters"),
            Some(json!({"posted_within": "someday"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_close_detail_and_delete_session() {
        let app = test_app();
        let (id, page) = create_session(&app, "?jobId=2").await;
        assert_eq!(page["detail"]["id"], "2");

        let (_, page) = send(&app, "DELETE", &format!("/api/v1/sessions/{id}/detail"), None).await;
        assert!(page["detail"].is_null());

        let (status, _) = send(&app, "DELETE", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, "DELETE", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

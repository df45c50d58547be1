//! API Routes
//!
//! Configures the Axum router with all election API endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, clear_cache_handler, count_candidates, count_elections,
    count_students, create_candidate, create_election, create_student, delete_candidate,
    delete_election, delete_student, get_candidate, get_election, get_student,
    get_student_by_number, health_handler, list_candidates, list_election_candidates,
    list_elections, list_students, list_students_by_vote, mark_student_voted,
    update_candidate, update_election, update_student, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/cache", delete(clear_cache_handler))
        .route("/api/cache/stats", get(cache_stats_handler))
        // Elections
        .route("/api/elections", get(list_elections).post(create_election))
        .route("/api/elections/count", get(count_elections))
        .route(
            "/api/elections/:id",
            get(get_election).put(update_election).delete(delete_election),
        )
        .route(
            "/api/elections/:id/candidates",
            get(list_election_candidates),
        )
        // Candidates
        .route("/api/candidates", get(list_candidates).post(create_candidate))
        .route("/api/candidates/count", get(count_candidates))
        .route(
            "/api/candidates/election/:election_id",
            get(list_election_candidates),
        )
        .route(
            "/api/candidates/:id",
            get(get_candidate)
                .put(update_candidate)
                .delete(delete_candidate),
        )
        // Students
        .route("/api/students", get(list_students).post(create_student))
        .route("/api/students/count", get(count_students))
        .route(
            "/api/students/number/:student_id",
            get(get_student_by_number),
        )
        .route(
            "/api/students/studentId/:student_id",
            get(get_student_by_number),
        )
        .route("/api/students/voted/:has_voted", get(list_students_by_vote))
        .route(
            "/api/students/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/api/students/:id/vote", post(mark_student_voted))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_router(AppState::from_config(&Config::default()))
    }

    async fn status_of(app: Router, method: &str, uri: &str, body: Option<&str>) -> StatusCode {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header("content-type", "application/json");
        }
        let request = builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let status = status_of(create_test_app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cache_stats_endpoint() {
        let status = status_of(create_test_app(), "GET", "/api/cache/stats", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_elections_empty() {
        let status = status_of(create_test_app(), "GET", "/api/elections", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_count_route_not_shadowed_by_id() {
        let status = status_of(create_test_app(), "GET", "/api/elections/count", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_election_endpoint() {
        let body = r#"{"name":"Council","startDate":"2026-03-01","endDate":"2026-03-05","academicYear":"2025-2026"}"#;
        let status = status_of(create_test_app(), "POST", "/api/elections", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_get_election_not_found() {
        let status = status_of(create_test_app(), "GET", "/api/elections/7", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_lookup_routes_not_shadowed_by_id() {
        let app = create_test_app();
        assert_eq!(
            status_of(app.clone(), "GET", "/api/students/voted/true", None).await,
            StatusCode::OK
        );
        assert_eq!(
            status_of(app.clone(), "GET", "/api/students/studentId/S404", None).await,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(app, "GET", "/api/candidates/election/8", None).await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_vote_for_missing_student() {
        let status = status_of(create_test_app(), "POST", "/api/students/3/vote", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

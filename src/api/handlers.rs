//! API Handlers
//!
//! HTTP request handlers for each election API endpoint. Handlers only
//! translate between HTTP and the services; every rule lives in a service.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::cache::KeyValueCache;
use crate::config::{Config, EligibilityRules};
use crate::error::Result;
use crate::models::{
    CacheClearResponse, CacheStatsResponse, Candidate, CandidateRequest, CountResponse,
    DeleteResponse, Election, ElectionRequest, HealthResponse, Student, StudentFilter,
    StudentRequest,
};
use crate::repository::{
    CandidateRepository, ElectionRepository, InMemoryStore, StudentRepository,
};
use crate::services::{CandidateService, ElectionCache, ElectionService, StudentService};

/// Application state shared across all handlers.
///
/// Built once at startup; the election cache is shared by reference with
/// the election service and the cache endpoints.
#[derive(Clone)]
pub struct AppState {
    pub elections: ElectionService,
    pub candidates: CandidateService,
    pub students: StudentService,
    /// Election cache, exposed for diagnostics
    pub cache: Arc<ElectionCache>,
}

impl AppState {
    /// Creates a new AppState over one store backing all three repositories.
    pub fn new<S>(store: Arc<S>, rules: EligibilityRules) -> Self
    where
        S: ElectionRepository + CandidateRepository + StudentRepository + 'static,
    {
        let cache = Arc::new(KeyValueCache::new());
        Self {
            elections: ElectionService::new(store.clone(), cache.clone()),
            candidates: CandidateService::new(store.clone(), store.clone(), rules.clone()),
            students: StudentService::new(store, rules),
            cache,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Uses the in-memory store and the configured eligibility rules.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(InMemoryStore::new()), config.eligibility())
    }
}

// == Elections ==

/// Handler for GET /api/elections
pub async fn list_elections(State(state): State<AppState>) -> Result<Json<Vec<Election>>> {
    Ok(Json(state.elections.get_all().await?))
}

/// Handler for GET /api/elections/:id
pub async fn get_election(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Election>> {
    Ok(Json(state.elections.get_by_id(id).await?))
}

/// Handler for POST /api/elections
pub async fn create_election(
    State(state): State<AppState>,
    Json(req): Json<ElectionRequest>,
) -> Result<(StatusCode, Json<Election>)> {
    let created = state.elections.create(req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for PUT /api/elections/:id
pub async fn update_election(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<ElectionRequest>,
) -> Result<Json<Election>> {
    Ok(Json(state.elections.update(id, req).await?))
}

/// Handler for DELETE /api/elections/:id
pub async fn delete_election(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>> {
    state.elections.delete(id).await?;
    Ok(Json(DeleteResponse::new("Election", id)))
}

/// Handler for GET /api/elections/count
pub async fn count_elections(State(state): State<AppState>) -> Result<Json<CountResponse>> {
    Ok(Json(CountResponse::new(state.elections.count().await?)))
}

/// Handler for GET /api/elections/:id/candidates
pub async fn list_election_candidates(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Candidate>>> {
    Ok(Json(state.candidates.get_by_election(id).await?))
}

// == Candidates ==

/// Handler for GET /api/candidates
pub async fn list_candidates(State(state): State<AppState>) -> Result<Json<Vec<Candidate>>> {
    Ok(Json(state.candidates.get_all().await?))
}

/// Handler for GET /api/candidates/:id
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Candidate>> {
    Ok(Json(state.candidates.get_by_id(id).await?))
}

/// Handler for POST /api/candidates
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(req): Json<CandidateRequest>,
) -> Result<(StatusCode, Json<Candidate>)> {
    let created = state.candidates.create(req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for PUT /api/candidates/:id
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<CandidateRequest>,
) -> Result<Json<Candidate>> {
    Ok(Json(state.candidates.update(id, req).await?))
}

/// Handler for DELETE /api/candidates/:id
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>> {
    state.candidates.delete(id).await?;
    Ok(Json(DeleteResponse::new("Candidate", id)))
}

/// Handler for GET /api/candidates/count
pub async fn count_candidates(State(state): State<AppState>) -> Result<Json<CountResponse>> {
    Ok(Json(CountResponse::new(state.candidates.count().await?)))
}

// == Students ==

/// Handler for GET /api/students, optionally filtered by `?voted=`
pub async fn list_students(
    State(state): State<AppState>,
    Query(filter): Query<StudentFilter>,
) -> Result<Json<Vec<Student>>> {
    Ok(Json(state.students.get_all(filter.voted).await?))
}

/// Handler for GET /api/students/voted/:has_voted
pub async fn list_students_by_vote(
    State(state): State<AppState>,
    Path(has_voted): Path<bool>,
) -> Result<Json<Vec<Student>>> {
    Ok(Json(state.students.get_all(Some(has_voted)).await?))
}

/// Handler for GET /api/students/:id
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Student>> {
    Ok(Json(state.students.get_by_id(id).await?))
}

/// Handler for GET /api/students/number/:student_id and
/// GET /api/students/studentId/:student_id
pub async fn get_student_by_number(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Student>> {
    Ok(Json(state.students.get_by_student_id(&student_id).await?))
}

/// Handler for POST /api/students
pub async fn create_student(
    State(state): State<AppState>,
    Json(req): Json<StudentRequest>,
) -> Result<(StatusCode, Json<Student>)> {
    let created = state.students.create(req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for PUT /api/students/:id
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<StudentRequest>,
) -> Result<Json<Student>> {
    Ok(Json(state.students.update(id, req).await?))
}

/// Handler for POST /api/students/:id/vote
pub async fn mark_student_voted(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Student>> {
    Ok(Json(state.students.mark_as_voted(id).await?))
}

/// Handler for DELETE /api/students/:id
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>> {
    state.students.delete(id).await?;
    Ok(Json(DeleteResponse::new("Student", id)))
}

/// Handler for GET /api/students/count
pub async fn count_students(State(state): State<AppState>) -> Result<Json<CountResponse>> {
    Ok(Json(CountResponse::new(state.students.count().await?)))
}

// == Cache & Health ==

/// Handler for GET /api/cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    Json(state.cache.stats().into())
}

/// Handler for DELETE /api/cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<CacheClearResponse> {
    let cleared = state.cache.len();
    state.cache.clear();
    Json(CacheClearResponse::new(cleared))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::from_config(&Config::default())
    }

    fn election_request(name: &str) -> ElectionRequest {
        ElectionRequest {
            name: name.to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 10),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 19),
            academic_year: "2025-2026".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_election() {
        let state = state();

        let (status, Json(created)) =
            create_election(State(state.clone()), Json(election_request("Council")))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let Json(fetched) = get_election(State(state), Path(created.id)).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_election() {
        let result = get_election(State(state()), Path(99)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list_elections_fills_cache() {
        let state = state();
        let (status, _) =
            create_election(State(state.clone()), Json(election_request("Council")))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let Json(all) = list_elections(State(state.clone())).await.unwrap();
        assert_eq!(all.len(), 1);

        let Json(stats) = cache_stats_handler(State(state)).await;
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test]
    async fn test_clear_cache_handler() {
        let state = state();
        let (_, Json(created)) =
            create_election(State(state.clone()), Json(election_request("Council")))
                .await
                .unwrap();
        let Json(all) = list_elections(State(state.clone())).await.unwrap();
        assert_eq!(all, vec![created]);

        let Json(resp) = clear_cache_handler(State(state.clone())).await;
        assert_eq!(resp.cleared, 1);
        assert!(state.cache.is_empty());
    }

    #[tokio::test]
    async fn test_delete_election_response() {
        let state = state();
        let (_, Json(created)) =
            create_election(State(state.clone()), Json(election_request("Council")))
                .await
                .unwrap();

        let Json(resp) = delete_election(State(state), Path(created.id)).await.unwrap();
        assert_eq!(resp.message, "Election deleted successfully");
        assert_eq!(resp.id, created.id.to_string());
    }

    #[tokio::test]
    async fn test_list_students_by_vote() {
        let state = state();
        let (_, Json(student)) = create_student(
            State(state.clone()),
            Json(StudentRequest {
                name: "Arman".to_string(),
                student_id: "S001".to_string(),
                faculty: "CS".to_string(),
                year_of_study: Some(2),
                has_voted: None,
            }),
        )
        .await
        .unwrap();

        let Json(pending) = list_students_by_vote(State(state.clone()), Path(false))
            .await
            .unwrap();
        assert_eq!(pending, vec![student]);

        let Json(voted) = list_students_by_vote(State(state), Path(true)).await.unwrap();
        assert!(voted.is_empty());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}

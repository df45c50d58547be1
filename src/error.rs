//! Error types for the election service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Failures reported by a persistent store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached or refused the operation
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A uniqueness or reference constraint was violated
    #[error("constraint violated: {0}")]
    Constraint(String),

    /// An update or delete addressed a row that does not exist
    #[error("no row with id {0}")]
    MissingRow(i32),

    /// The student's vote was already recorded
    #[error("student {0} has already voted")]
    AlreadyVoted(i32),

    /// The election already holds its maximum number of candidates
    #[error("election {election_id} already has {limit} candidates")]
    CandidateLimit { election_id: i32, limit: u64 },
}

// == App Error Enum ==
/// Unified error type for the election service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Requested entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Caller-supplied data failed validation
    #[error("{0}")]
    InvalidInput(String),

    /// Entity collides with an existing one
    #[error("{0}")]
    Conflict(String),

    /// Persistent store failed
    #[error("Persistence failed: {0}")]
    Persistence(#[from] StoreError),
}

impl AppError {
    /// Builds the not-found error for an entity kind and id.
    pub fn not_found(kind: &str, id: impl std::fmt::Display) -> Self {
        AppError::NotFound(format!("{} not found with id: {}", kind, id))
    }

    /// Maps a failed write on a `kind` row to the error the caller sees.
    ///
    /// A row that vanished after its existence check is still not found,
    /// and rule violations caught inside the store are client errors.
    pub fn from_store(kind: &str, err: StoreError) -> Self {
        match err {
            StoreError::MissingRow(id) => AppError::not_found(kind, id),
            StoreError::Constraint(msg) => AppError::Conflict(msg),
            StoreError::AlreadyVoted(_) => {
                AppError::InvalidInput("Student has already voted".to_string())
            }
            StoreError::CandidateLimit { election_id, limit } => AppError::InvalidInput(format!(
                "Election {} already has the maximum of {} candidates",
                election_id, limit
            )),
            other => AppError::Persistence(other),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Persistence(err) => {
                // Store details stay in the log
                tracing::error!("Persistence failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Persistence failed".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(message));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the election service.
pub type Result<T> = std::result::Result<T, AppError>;

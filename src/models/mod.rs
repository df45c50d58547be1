//! Entities and request/response models for the election API
//!
//! Entities are what the repositories store; the request DTOs validate into
//! the `New*` types the services hand to the repositories.

pub mod candidate;
pub mod election;
pub mod requests;
pub mod responses;
pub mod student;

// Re-export commonly used types
pub use candidate::{Candidate, NewCandidate};
pub use election::{Election, NewElection};
pub use requests::{CandidateRequest, ElectionRequest, StudentFilter, StudentRequest};
pub use responses::{
    CacheClearResponse, CacheStatsResponse, CountResponse, DeleteResponse, ErrorResponse,
    HealthResponse,
};
pub use student::{NewStudent, Student};

//! Repository Module
//!
//! Persistence contracts for elections, candidates and students. Services
//! depend on these traits only; `InMemoryStore` is the bundled backend.

mod memory;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Candidate, Election, NewCandidate, NewElection, NewStudent, Student};

pub use memory::InMemoryStore;

/// Result type returned by every repository call.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == Election Repository ==
#[async_trait]
pub trait ElectionRepository: Send + Sync {
    /// Persists a new election and returns it with its assigned id.
    async fn save(&self, election: NewElection) -> StoreResult<Election>;

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Election>>;

    /// All elections, latest start date first.
    async fn find_all(&self) -> StoreResult<Vec<Election>>;

    async fn update(&self, id: i32, election: NewElection) -> StoreResult<Election>;

    /// Deletes the election together with its candidates.
    async fn delete_by_id(&self, id: i32) -> StoreResult<()>;

    async fn exists_by_id(&self, id: i32) -> StoreResult<bool>;

    async fn count(&self) -> StoreResult<u64>;
}

// == Candidate Repository ==
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Persists a candidate unless its election already holds `limit`.
    async fn save(&self, candidate: NewCandidate, limit: u64) -> StoreResult<Candidate>;

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Candidate>>;

    /// All candidates ordered by id.
    async fn find_all(&self) -> StoreResult<Vec<Candidate>>;

    async fn find_by_election_id(&self, election_id: i32) -> StoreResult<Vec<Candidate>>;

    async fn count_by_election_id(&self, election_id: i32) -> StoreResult<u64>;

    /// Replaces a candidate. Moving into a full election fails with
    /// `StoreError::CandidateLimit`.
    async fn update(&self, id: i32, candidate: NewCandidate, limit: u64)
        -> StoreResult<Candidate>;

    async fn delete_by_id(&self, id: i32) -> StoreResult<()>;

    async fn exists_by_id(&self, id: i32) -> StoreResult<bool>;

    async fn count(&self) -> StoreResult<u64>;
}

// == Student Repository ==
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Persists a new student. Student numbers are unique.
    async fn save(&self, student: NewStudent) -> StoreResult<Student>;

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Student>>;

    async fn find_by_student_id(&self, student_id: &str) -> StoreResult<Option<Student>>;

    /// All students ordered by id.
    async fn find_all(&self) -> StoreResult<Vec<Student>>;

    async fn find_by_voting_status(&self, has_voted: bool) -> StoreResult<Vec<Student>>;

    async fn update(&self, id: i32, student: NewStudent) -> StoreResult<Student>;

    /// Sets `has_voted` in one step, failing with `StoreError::AlreadyVoted`
    /// when it is already set.
    async fn mark_voted(&self, id: i32) -> StoreResult<Student>;

    async fn delete_by_id(&self, id: i32) -> StoreResult<()>;

    async fn exists_by_id(&self, id: i32) -> StoreResult<bool>;

    async fn count(&self) -> StoreResult<u64>;
}

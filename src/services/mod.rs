//! Service Module
//!
//! Business rules between the HTTP handlers and the repositories. Only the
//! election service caches.

pub mod candidate;
pub mod election;
pub mod student;

pub use candidate::CandidateService;
pub use election::{
    election_key, CachedElections, ElectionCache, ElectionService, ALL_ELECTIONS_KEY,
    ELECTIONS_NAMESPACE, ELECTION_KEY_PREFIX,
};
pub use student::StudentService;

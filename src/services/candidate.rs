//! Candidate Service
//!
//! Candidate registration rules on top of the candidate repository.
//! Candidates are read straight from the repository; nothing here is cached.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::EligibilityRules;
use crate::error::{AppError, Result, StoreError};
use crate::models::{Candidate, CandidateRequest, NewCandidate};
use crate::repository::{CandidateRepository, ElectionRepository};

#[derive(Clone)]
pub struct CandidateService {
    repository: Arc<dyn CandidateRepository>,
    elections: Arc<dyn ElectionRepository>,
    rules: EligibilityRules,
}

impl CandidateService {
    pub fn new(
        repository: Arc<dyn CandidateRepository>,
        elections: Arc<dyn ElectionRepository>,
        rules: EligibilityRules,
    ) -> Self {
        Self {
            repository,
            elections,
            rules,
        }
    }

    /// Registers a candidate for an existing election with a free slot.
    pub async fn create(&self, request: CandidateRequest) -> Result<Candidate> {
        let candidate = self.validate(request).await?;

        let created = self
            .repository
            .save(candidate, self.limit())
            .await
            .map_err(store_error)?;
        info!(
            "Registered candidate '{}' for election {}",
            created.name, created.election_id
        );
        Ok(created)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Candidate> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Candidate", id))
    }

    pub async fn get_all(&self) -> Result<Vec<Candidate>> {
        Ok(self.repository.find_all().await?)
    }

    /// Candidates registered for one election; the election must exist.
    pub async fn get_by_election(&self, election_id: i32) -> Result<Vec<Candidate>> {
        self.ensure_election(election_id).await?;
        Ok(self.repository.find_by_election_id(election_id).await?)
    }

    /// Replaces a candidate. Moving to another election needs a free slot there.
    pub async fn update(&self, id: i32, request: CandidateRequest) -> Result<Candidate> {
        self.get_by_id(id).await?;
        let candidate = self.validate(request).await?;

        let updated = self
            .repository
            .update(id, candidate, self.limit())
            .await
            .map_err(store_error)?;
        info!("Updated candidate {}", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(AppError::not_found("Candidate", id));
        }
        self.repository
            .delete_by_id(id)
            .await
            .map_err(store_error)?;
        info!("Deleted candidate {}", id);
        Ok(())
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(self.repository.count().await?)
    }

    async fn validate(&self, request: CandidateRequest) -> Result<NewCandidate> {
        let candidate = request.validate(&self.rules).map_err(|err| {
            warn!("Rejected candidate: {}", err);
            err
        })?;
        self.ensure_election(candidate.election_id).await?;
        Ok(candidate)
    }

    async fn ensure_election(&self, election_id: i32) -> Result<()> {
        if self.elections.exists_by_id(election_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Election", election_id))
        }
    }

    /// Candidate cap per election; the store checks it under its write lock.
    fn limit(&self) -> u64 {
        self.rules.max_candidates_per_election as u64
    }
}

/// The election can vanish between the existence check and the write.
fn store_error(err: StoreError) -> AppError {
    AppError::from_store("Candidate", err)
}

//! Election Service
//!
//! Read-through caching over the election repository. Reads consult the
//! cache first and populate it on a miss; writes go to the repository first
//! and only then drop the cache entries they made stale.

use std::sync::Arc;

use tracing::{info, warn};

use crate::cache::KeyValueCache;
use crate::error::{AppError, Result, StoreError};
use crate::models::{Election, ElectionRequest, NewElection};
use crate::repository::ElectionRepository;

// == Cache Keys ==
/// Namespace shared by every election cache key.
pub const ELECTIONS_NAMESPACE: &str = "elections:";
/// Key holding the full election list.
pub const ALL_ELECTIONS_KEY: &str = "elections:all";
/// Prefix of the per-election keys; the id is appended.
pub const ELECTION_KEY_PREFIX: &str = "elections:id:";

/// Cache key for a single election.
pub fn election_key(id: i32) -> String {
    format!("{}{}", ELECTION_KEY_PREFIX, id)
}

/// Values stored in the election cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedElections {
    /// The whole list, in repository order
    All(Vec<Election>),
    /// One election by id
    One(Election),
}

/// Cache instantiation used by the election service.
pub type ElectionCache = KeyValueCache<CachedElections>;

// == Election Service ==
/// Election operations with a read-through, write-invalidate cache.
#[derive(Clone)]
pub struct ElectionService {
    repository: Arc<dyn ElectionRepository>,
    cache: Arc<ElectionCache>,
}

impl ElectionService {
    pub fn new(repository: Arc<dyn ElectionRepository>, cache: Arc<ElectionCache>) -> Self {
        Self { repository, cache }
    }

    // == Get All ==
    /// Returns every election, from the cache when present.
    pub async fn get_all(&self) -> Result<Vec<Election>> {
        if let Some(CachedElections::All(elections)) = self.cache.get(ALL_ELECTIONS_KEY) {
            return Ok(elections);
        }

        let elections = self.repository.find_all().await?;
        self.cache
            .put(ALL_ELECTIONS_KEY, CachedElections::All(elections.clone()));
        Ok(elections)
    }

    // == Get By Id ==
    /// Returns one election, from the cache when present.
    ///
    /// An id the repository does not know is `NotFound` and leaves the cache
    /// untouched.
    pub async fn get_by_id(&self, id: i32) -> Result<Election> {
        let key = election_key(id);
        if let Some(CachedElections::One(election)) = self.cache.get(&key) {
            return Ok(election);
        }

        let election = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Election", id))?;
        self.cache.put(key, CachedElections::One(election.clone()));
        Ok(election)
    }

    // == Create ==
    /// Validates and stores a new election, then drops every election entry.
    pub async fn create(&self, request: ElectionRequest) -> Result<Election> {
        let election = validate(request)?;
        let created = self.repository.save(election).await?;

        self.cache.invalidate_prefix(ELECTIONS_NAMESPACE);

        info!("Created election {} '{}'", created.id, created.name);
        Ok(created)
    }

    // == Update ==
    /// Replaces an existing election, then drops its entry and the list.
    pub async fn update(&self, id: i32, request: ElectionRequest) -> Result<Election> {
        if !self.repository.exists_by_id(id).await? {
            return Err(AppError::not_found("Election", id));
        }
        let election = validate(request)?;
        let updated = self
            .repository
            .update(id, election)
            .await
            .map_err(store_error)?;

        self.cache.invalidate(&election_key(id));
        self.cache.invalidate(ALL_ELECTIONS_KEY);

        info!("Updated election {}", id);
        Ok(updated)
    }

    // == Delete ==
    /// Deletes an election, then drops its entry and the list.
    pub async fn delete(&self, id: i32) -> Result<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(AppError::not_found("Election", id));
        }
        self.repository
            .delete_by_id(id)
            .await
            .map_err(store_error)?;

        self.cache.invalidate(&election_key(id));
        self.cache.invalidate(ALL_ELECTIONS_KEY);

        info!("Deleted election {}", id);
        Ok(())
    }

    // == Count ==
    /// Number of stored elections. Never cached.
    pub async fn count(&self) -> Result<u64> {
        Ok(self.repository.count().await?)
    }
}

/// A row deleted after the existence check is still not found.
fn store_error(err: StoreError) -> AppError {
    AppError::from_store("Election", err)
}

fn validate(request: ElectionRequest) -> Result<NewElection> {
    request.validate().map_err(|err| {
        warn!("Rejected election: {}", err);
        err
    })
}

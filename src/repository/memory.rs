//! In-Memory Store
//!
//! Repository backend holding every table in process memory. Each table is a
//! `BTreeMap` behind a `tokio::sync::RwLock`, so rows come back in id order.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::StoreError;
use crate::models::{Candidate, Election, NewCandidate, NewElection, NewStudent, Student};
use crate::repository::{
    CandidateRepository, ElectionRepository, StoreResult, StudentRepository,
};

// == Rows ==
/// Contents of one table plus its id sequence.
#[derive(Debug)]
pub struct Rows<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T: Clone> Rows<T> {
    /// Builds a row with the next id and stores it.
    pub fn insert(&mut self, make: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = make(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub fn get(&self, id: i32) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: i32) -> StoreResult<&mut T> {
        self.rows.get_mut(&id).ok_or(StoreError::MissingRow(id))
    }

    /// Replaces an existing row.
    pub fn replace(&mut self, id: i32, row: T) -> StoreResult<T> {
        match self.rows.get_mut(&id) {
            Some(slot) => {
                *slot = row.clone();
                Ok(row)
            }
            None => Err(StoreError::MissingRow(id)),
        }
    }

    pub fn remove(&mut self, id: i32) -> StoreResult<T> {
        self.rows.remove(&id).ok_or(StoreError::MissingRow(id))
    }

    /// Rows in id order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    /// Removes every row matching `pred`, returning how many went.
    pub fn remove_where(&mut self, pred: impl Fn(&T) -> bool) -> usize {
        let before = self.rows.len();
        self.rows.retain(|_, row| !pred(row));
        before - self.rows.len()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

// == Table ==
/// A lockable table of rows keyed by id.
#[derive(Debug)]
pub struct Table<T> {
    inner: RwLock<Rows<T>>,
}

impl<T: Clone> Table<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Rows {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Rows<T>> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Rows<T>> {
        self.inner.write().await
    }

    pub async fn find(&self, id: i32) -> Option<T> {
        self.read().await.get(id).cloned()
    }

    pub async fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.read().await.iter().filter(|row| pred(row)).cloned().collect()
    }

    pub async fn contains(&self, id: i32) -> bool {
        self.read().await.get(id).is_some()
    }

    pub async fn count(&self) -> u64 {
        self.read().await.len() as u64
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

// == In-Memory Store ==
/// All three tables of the election system.
///
/// Lock order is elections, then candidates, then students.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    elections: Table<Election>,
    candidates: Table<Candidate>,
    students: Table<Student>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ElectionRepository for InMemoryStore {
    async fn save(&self, election: NewElection) -> StoreResult<Election> {
        let mut rows = self.elections.write().await;
        Ok(rows.insert(|id| election.with_id(id)))
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Election>> {
        Ok(self.elections.find(id).await)
    }

    async fn find_all(&self) -> StoreResult<Vec<Election>> {
        let mut all = self.elections.filter(|_| true).await;
        // Latest start first; ties keep id order
        all.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn update(&self, id: i32, election: NewElection) -> StoreResult<Election> {
        let mut rows = self.elections.write().await;
        rows.replace(id, election.with_id(id))
    }

    async fn delete_by_id(&self, id: i32) -> StoreResult<()> {
        let mut elections = self.elections.write().await;
        let mut candidates = self.candidates.write().await;
        elections.remove(id)?;
        candidates.remove_where(|c| c.election_id == id);
        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> StoreResult<bool> {
        Ok(self.elections.contains(id).await)
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.elections.count().await)
    }
}

#[async_trait]
impl CandidateRepository for InMemoryStore {
    async fn save(&self, candidate: NewCandidate, limit: u64) -> StoreResult<Candidate> {
        let elections = self.elections.read().await;
        ensure_election(&elections, candidate.election_id)?;
        let mut rows = self.candidates.write().await;
        ensure_below_limit(&rows, candidate.election_id, limit)?;
        Ok(rows.insert(|id| candidate.with_id(id)))
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Candidate>> {
        Ok(self.candidates.find(id).await)
    }

    async fn find_all(&self) -> StoreResult<Vec<Candidate>> {
        Ok(self.candidates.filter(|_| true).await)
    }

    async fn find_by_election_id(&self, election_id: i32) -> StoreResult<Vec<Candidate>> {
        Ok(self
            .candidates
            .filter(|c| c.election_id == election_id)
            .await)
    }

    async fn count_by_election_id(&self, election_id: i32) -> StoreResult<u64> {
        let rows = self.candidates.read().await;
        Ok(rows.iter().filter(|c| c.election_id == election_id).count() as u64)
    }

    async fn update(
        &self,
        id: i32,
        candidate: NewCandidate,
        limit: u64,
    ) -> StoreResult<Candidate> {
        let elections = self.elections.read().await;
        ensure_election(&elections, candidate.election_id)?;
        let mut rows = self.candidates.write().await;
        let moving = rows
            .get(id)
            .ok_or(StoreError::MissingRow(id))?
            .election_id
            != candidate.election_id;
        if moving {
            ensure_below_limit(&rows, candidate.election_id, limit)?;
        }
        rows.replace(id, candidate.with_id(id))
    }

    async fn delete_by_id(&self, id: i32) -> StoreResult<()> {
        self.candidates.write().await.remove(id).map(|_| ())
    }

    async fn exists_by_id(&self, id: i32) -> StoreResult<bool> {
        Ok(self.candidates.contains(id).await)
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.candidates.count().await)
    }
}

#[async_trait]
impl StudentRepository for InMemoryStore {
    async fn save(&self, student: NewStudent) -> StoreResult<Student> {
        let mut rows = self.students.write().await;
        if rows.iter().any(|s| s.student_id == student.student_id) {
            return Err(duplicate_student(&student.student_id));
        }
        Ok(rows.insert(|id| student.with_id(id)))
    }

    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Student>> {
        Ok(self.students.find(id).await)
    }

    async fn find_by_student_id(&self, student_id: &str) -> StoreResult<Option<Student>> {
        let rows = self.students.read().await;
        let found = rows.iter().find(|s| s.student_id == student_id).cloned();
        Ok(found)
    }

    async fn find_all(&self) -> StoreResult<Vec<Student>> {
        Ok(self.students.filter(|_| true).await)
    }

    async fn find_by_voting_status(&self, has_voted: bool) -> StoreResult<Vec<Student>> {
        Ok(self.students.filter(|s| s.has_voted == has_voted).await)
    }

    async fn update(&self, id: i32, student: NewStudent) -> StoreResult<Student> {
        let mut rows = self.students.write().await;
        if rows
            .iter()
            .any(|s| s.id != id && s.student_id == student.student_id)
        {
            return Err(duplicate_student(&student.student_id));
        }
        rows.replace(id, student.with_id(id))
    }

    async fn mark_voted(&self, id: i32) -> StoreResult<Student> {
        let mut rows = self.students.write().await;
        let student = rows.get_mut(id)?;
        if student.has_voted {
            return Err(StoreError::AlreadyVoted(id));
        }
        student.has_voted = true;
        Ok(student.clone())
    }

    async fn delete_by_id(&self, id: i32) -> StoreResult<()> {
        self.students.write().await.remove(id).map(|_| ())
    }

    async fn exists_by_id(&self, id: i32) -> StoreResult<bool> {
        Ok(self.students.contains(id).await)
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.students.count().await)
    }
}

fn ensure_election(elections: &Rows<Election>, election_id: i32) -> StoreResult<()> {
    match elections.get(election_id) {
        Some(_) => Ok(()),
        None => Err(StoreError::Constraint(format!(
            "election {} does not exist",
            election_id
        ))),
    }
}

fn ensure_below_limit(
    candidates: &Rows<Candidate>,
    election_id: i32,
    limit: u64,
) -> StoreResult<()> {
    let registered = candidates
        .iter()
        .filter(|c| c.election_id == election_id)
        .count() as u64;
    if registered >= limit {
        return Err(StoreError::CandidateLimit { election_id, limit });
    }
    Ok(())
}

fn duplicate_student(student_id: &str) -> StoreError {
    StoreError::Constraint(format!("Student ID already exists: {}", student_id))
}

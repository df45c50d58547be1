//! Student Service
//!
//! Voter registration and vote tracking over the student repository.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::EligibilityRules;
use crate::error::{AppError, Result, StoreError};
use crate::models::{NewStudent, Student, StudentRequest};
use crate::repository::StudentRepository;

#[derive(Clone)]
pub struct StudentService {
    repository: Arc<dyn StudentRepository>,
    rules: EligibilityRules,
}

impl StudentService {
    pub fn new(repository: Arc<dyn StudentRepository>, rules: EligibilityRules) -> Self {
        Self { repository, rules }
    }

    /// Registers a student. New students have never voted.
    pub async fn create(&self, request: StudentRequest) -> Result<Student> {
        let mut student = self.validate(request)?;
        student.has_voted = false;

        let created = self
            .repository
            .save(student)
            .await
            .map_err(store_error)?;
        info!("Registered student {}", created.student_id);
        Ok(created)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Student> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Student", id))
    }

    /// Looks a student up by university student number.
    pub async fn get_by_student_id(&self, student_id: &str) -> Result<Student> {
        self.repository
            .find_by_student_id(student_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Student not found with student ID: {}", student_id))
            })
    }

    /// All students, or only those matching `voted` when given.
    pub async fn get_all(&self, voted: Option<bool>) -> Result<Vec<Student>> {
        let students = match voted {
            Some(has_voted) => self.repository.find_by_voting_status(has_voted).await?,
            None => self.repository.find_all().await?,
        };
        Ok(students)
    }

    /// Replaces a student. An omitted `hasVoted` keeps the stored value.
    pub async fn update(&self, id: i32, request: StudentRequest) -> Result<Student> {
        let existing = self.get_by_id(id).await?;
        let keep_vote = request.has_voted.is_none();
        let mut student = self.validate(request)?;
        if keep_vote {
            student.has_voted = existing.has_voted;
        }

        let updated = self
            .repository
            .update(id, student)
            .await
            .map_err(store_error)?;
        info!("Updated student {}", id);
        Ok(updated)
    }

    /// Records that a student has cast their vote.
    ///
    /// The already-voted check and the write happen in one store call, so
    /// concurrent votes for the same student record at most one.
    pub async fn mark_as_voted(&self, id: i32) -> Result<Student> {
        if !self.rules.voting_enabled {
            return Err(AppError::InvalidInput(
                "Voting is currently disabled".to_string(),
            ));
        }

        let student = self.get_by_id(id).await?;
        if student.has_voted {
            return Err(AppError::InvalidInput(
                "Student has already voted".to_string(),
            ));
        }
        if !self.rules.voter_years.contains(&student.year_of_study) {
            return Err(AppError::InvalidInput(format!(
                "Student in year {} is not eligible to vote",
                student.year_of_study
            )));
        }

        let updated = self
            .repository
            .mark_voted(id)
            .await
            .map_err(store_error)?;
        info!("Student {} has voted", updated.student_id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(AppError::not_found("Student", id));
        }
        self.repository
            .delete_by_id(id)
            .await
            .map_err(store_error)?;
        info!("Deleted student {}", id);
        Ok(())
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(self.repository.count().await?)
    }

    fn validate(&self, request: StudentRequest) -> Result<NewStudent> {
        request.validate(&self.rules).map_err(|err| {
            warn!("Rejected student: {}", err);
            err
        })
    }
}

/// Duplicate student numbers surface as a conflict.
fn store_error(err: StoreError) -> AppError {
    AppError::from_store("Student", err)
}

//! Demo data loaded at startup when `SEED_DEMO_DATA` is set.

use chrono::NaiveDate;
use tracing::info;

use crate::api::AppState;
use crate::error::Result;
use crate::models::{CandidateRequest, ElectionRequest, StudentRequest};

const STUDENTS: [(&str, &str, &str, u8); 4] = [
    ("Arman Ertay", "S001", "CS", 3),
    ("Dana Sadykova", "S002", "SE", 1),
    ("Timur Bekov", "S003", "CS", 4),
    ("Aliya Nurlanovna", "S004", "SE", 2),
];

/// Creates one election with a candidate and a handful of students.
///
/// Goes through the services so every record passes normal validation.
pub async fn seed_demo_data(state: &AppState) -> Result<()> {
    let election = state
        .elections
        .create(ElectionRequest {
            name: "University President Election 2026".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 10),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 19),
            academic_year: "2025-2026".to_string(),
        })
        .await?;

    state
        .candidates
        .create(CandidateRequest {
            name: "Serik Akmetovich".to_string(),
            faculty: "CS".to_string(),
            year_of_study: Some(3),
            campaign: Some("Better campus!".to_string()),
            election_id: Some(election.id),
        })
        .await?;

    for (name, student_id, faculty, year) in STUDENTS {
        state
            .students
            .create(StudentRequest {
                name: name.to_string(),
                student_id: student_id.to_string(),
                faculty: faculty.to_string(),
                year_of_study: Some(year),
                has_voted: None,
            })
            .await?;
    }

    info!(
        "Seeded demo data: election {}, 1 candidate, {} students",
        election.id,
        STUDENTS.len()
    );
    Ok(())
}

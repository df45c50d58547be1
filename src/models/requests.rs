//! Request DTOs for the election API
//!
//! Defines the structure of incoming HTTP request bodies. Each request turns
//! into its validated `New*` form through a single `validate` call.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::config::EligibilityRules;
use crate::error::{AppError, Result};
use crate::models::{NewCandidate, NewElection, NewStudent};

/// Request body for creating or updating an election
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub academic_year: String,
}

impl ElectionRequest {
    /// Validates the request data.
    ///
    /// Fails with `InvalidInput` on the first rule broken.
    pub fn validate(self) -> Result<NewElection> {
        let name = required(&self.name, "Election name cannot be empty")?;
        let start_date = self
            .start_date
            .ok_or_else(|| invalid("Start date cannot be null"))?;
        let end_date = self
            .end_date
            .ok_or_else(|| invalid("End date cannot be null"))?;
        if start_date > end_date {
            return Err(invalid("Start date must be before end date"));
        }
        let academic_year = required(&self.academic_year, "Academic year cannot be empty")?;

        Ok(NewElection {
            name,
            start_date,
            end_date,
            academic_year,
        })
    }
}

/// Request body for creating or updating a candidate
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub faculty: String,
    #[serde(default)]
    pub year_of_study: Option<u8>,
    #[serde(default)]
    pub campaign: Option<String>,
    #[serde(default)]
    pub election_id: Option<i32>,
}

impl CandidateRequest {
    /// Validates the request data against the candidate eligibility rules.
    ///
    /// Whether the election exists is checked by the service, not here.
    pub fn validate(self, rules: &EligibilityRules) -> Result<NewCandidate> {
        let name = required(&self.name, "Candidate name cannot be empty")?;
        let faculty = required(&self.faculty, "Faculty cannot be empty")?;
        let year_of_study = self
            .year_of_study
            .ok_or_else(|| invalid("Year of study is required"))?;
        if !rules.candidate_years.contains(&year_of_study) {
            return Err(invalid(format!(
                "Candidate must be in year {} to {}. Current year: {}",
                rules.candidate_years.start(),
                rules.candidate_years.end(),
                year_of_study
            )));
        }
        let election_id = self
            .election_id
            .ok_or_else(|| invalid("Candidate must be associated with an election"))?;

        let campaign = self
            .campaign
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(NewCandidate {
            name,
            faculty,
            year_of_study,
            campaign,
            election_id,
        })
    }
}

/// Request body for creating or updating a student
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub faculty: String,
    #[serde(default)]
    pub year_of_study: Option<u8>,
    /// Ignored on create; on update, omitted means unchanged
    #[serde(default)]
    pub has_voted: Option<bool>,
}

impl StudentRequest {
    /// Validates the request data against the voter eligibility rules.
    ///
    /// A missing `has_voted` becomes `false`.
    pub fn validate(self, rules: &EligibilityRules) -> Result<NewStudent> {
        let name = required(&self.name, "Student name cannot be empty")?;
        let student_id = required(&self.student_id, "Student ID cannot be empty")?;
        let faculty = required(&self.faculty, "Faculty cannot be empty")?;
        let year_of_study = self
            .year_of_study
            .ok_or_else(|| invalid("Year of study is required"))?;
        if !rules.voter_years.contains(&year_of_study) {
            return Err(invalid(format!(
                "Student must be in year {}-{}. Current year: {}",
                rules.voter_years.start(),
                rules.voter_years.end(),
                year_of_study
            )));
        }

        Ok(NewStudent {
            name,
            student_id,
            faculty,
            year_of_study,
            has_voted: self.has_voted.unwrap_or(false),
        })
    }
}

/// Query string for listing students
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentFilter {
    /// Restrict to students who have (or have not) voted
    pub voted: Option<bool>,
}

fn required(value: &str, message: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(invalid(message))
    } else {
        Ok(trimmed.to_string())
    }
}

fn invalid(message: impl Into<String>) -> AppError {
    AppError::InvalidInput(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn valid_election() -> ElectionRequest {
        ElectionRequest {
            name: "Student Council 2026".to_string(),
            start_date: date(2026, 3, 1),
            end_date: date(2026, 3, 5),
            academic_year: "2025-2026".to_string(),
        }
    }

    fn message(result: Result<impl std::fmt::Debug>) -> String {
        match result {
            Err(AppError::InvalidInput(msg)) => msg,
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_election_request_deserialize() {
        let json = r#"{"name":"Council","startDate":"2026-03-01","endDate":"2026-03-05","academicYear":"2025-2026"}"#;
        let req: ElectionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Council");
        assert_eq!(req.start_date, date(2026, 3, 1));
    }

    #[test]
    fn test_validate_valid_election() {
        let election = valid_election().validate().unwrap();
        assert_eq!(election.name, "Student Council 2026");
        assert_eq!(election.academic_year, "2025-2026");
    }

    #[test]
    fn test_validate_trims_name() {
        let req = ElectionRequest {
            name: "  Council  ".to_string(),
            ..valid_election()
        };
        assert_eq!(req.validate().unwrap().name, "Council");
    }

    #[test]
    fn test_validate_blank_name() {
        let req = ElectionRequest {
            name: "   ".to_string(),
            ..valid_election()
        };
        assert_eq!(message(req.validate()), "Election name cannot be empty");
    }

    #[test]
    fn test_validate_missing_dates() {
        let req = ElectionRequest {
            start_date: None,
            ..valid_election()
        };
        assert_eq!(message(req.validate()), "Start date cannot be null");

        let req = ElectionRequest {
            end_date: None,
            ..valid_election()
        };
        assert_eq!(message(req.validate()), "End date cannot be null");
    }

    #[test]
    fn test_validate_inverted_dates() {
        let req = ElectionRequest {
            start_date: date(2026, 3, 6),
            ..valid_election()
        };
        assert_eq!(message(req.validate()), "Start date must be before end date");
    }

    #[test]
    fn test_validate_single_day_election() {
        let req = ElectionRequest {
            start_date: date(2026, 3, 5),
            end_date: date(2026, 3, 5),
            ..valid_election()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_academic_year() {
        let req = ElectionRequest {
            academic_year: String::new(),
            ..valid_election()
        };
        assert_eq!(message(req.validate()), "Academic year cannot be empty");
    }

    #[test]
    fn test_candidate_year_out_of_range() {
        let req = CandidateRequest {
            name: "Serik".to_string(),
            faculty: "CS".to_string(),
            year_of_study: Some(1),
            campaign: None,
            election_id: Some(1),
        };
        let msg = message(req.validate(&EligibilityRules::default()));
        assert!(msg.contains("year 2 to 4"));
    }

    #[test]
    fn test_candidate_blank_campaign_dropped() {
        let req = CandidateRequest {
            name: "Serik".to_string(),
            faculty: "CS".to_string(),
            year_of_study: Some(3),
            campaign: Some("  ".to_string()),
            election_id: Some(1),
        };
        let candidate = req.validate(&EligibilityRules::default()).unwrap();
        assert_eq!(candidate.campaign, None);
    }

    #[test]
    fn test_candidate_requires_election() {
        let req = CandidateRequest {
            name: "Serik".to_string(),
            faculty: "CS".to_string(),
            year_of_study: Some(3),
            campaign: None,
            election_id: None,
        };
        let msg = message(req.validate(&EligibilityRules::default()));
        assert_eq!(msg, "Candidate must be associated with an election");
    }

    #[test]
    fn test_student_defaults_not_voted() {
        let json = r#"{"name":"Andrey","studentId":"S001","faculty":"SE","yearOfStudy":2}"#;
        let req: StudentRequest = serde_json::from_str(json).unwrap();
        let student = req.validate(&EligibilityRules::default()).unwrap();
        assert!(!student.has_voted);
        assert_eq!(student.student_id, "S001");
    }

    #[test]
    fn test_student_year_out_of_range() {
        let req = StudentRequest {
            name: "Andrey".to_string(),
            student_id: "S001".to_string(),
            faculty: "SE".to_string(),
            year_of_study: Some(5),
            has_voted: None,
        };
        let msg = message(req.validate(&EligibilityRules::default()));
        assert!(msg.contains("year 1-4"));
    }
}

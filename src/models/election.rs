//! Election entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Election {
    /// Identifier assigned by the store
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Academic year label, e.g. "2025-2026"
    pub academic_year: String,
}

/// Validated election data that has not been given an id yet.
///
/// Only produced by [`ElectionRequest::validate`](crate::models::ElectionRequest::validate),
/// so `start_date <= end_date` and both text fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewElection {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub academic_year: String,
}

impl NewElection {
    /// Attaches a store-assigned id.
    pub fn with_id(self, id: i32) -> Election {
        Election {
            id,
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            academic_year: self.academic_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Election {
        NewElection {
            name: "University President Election 2026".to_string(),
            start_date: date(2026, 1, 10),
            end_date: date(2026, 1, 19),
            academic_year: "2025-2026".to_string(),
        }
        .with_id(1)
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["startDate"], "2026-01-10");
        assert_eq!(json["academicYear"], "2025-2026");
    }
}
